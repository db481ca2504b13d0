//! Line sources for SJON documents
//!
//! The parsing core only consumes ordered lines. This module is the thin
//! layer that produces them:
//!
//! - [`load_lines`] / [`open_document`] read a file
//! - [`ResourceResolver`] maps logical resource names to files

mod errors;
mod loader;
mod resources;

pub use errors::{SourceError, SourceResult};
pub use loader::{load_lines, open_document};
pub use resources::{ResourceConfig, ResourceResolver};
