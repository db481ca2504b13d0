//! Schema subsystem for SJON documents
//!
//! The first line of an SJON document declares the column types of every
//! record that follows:
//!
//! ```text
//! {String,String,Integer}
//! ```
//!
//! # Design Principles
//!
//! - A schema is immutable once built
//! - Conformance checks are total: they report, they never fail
//! - Unrecognized type names never block a record
//! - Validation is deterministic and side-effect free

mod errors;
mod types;
mod validator;

pub use errors::{Diagnostic, Violation};
pub use types::{ColumnType, Schema, DATE_FORMAT};
pub use validator::{Conformance, TypeCheck};

pub(crate) use validator::parse_double;
