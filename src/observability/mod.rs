//! Observability for SJON tooling
//!
//! The parsing core reports through values (conformance results, integrity
//! reports) and never logs. Collaborators at the edges (file loading,
//! resource resolution, the CLI) turn those values into structured log lines.
//!
//! # Usage
//!
//! ```ignore
//! use sjon::observability::Logger;
//!
//! Logger::info("DOCUMENT_LOADED", &[("lines", "482")]);
//! ```

mod logger;

pub use logger::{Logger, Severity, LOG_LEVEL_ENV};
