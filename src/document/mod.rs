//! Document subsystem for SJON files
//!
//! A [`Document`] holds the lines of one SJON source and derives its views on
//! demand: comments, raw data lines, parsed [`Record`]s and the declared
//! [`crate::schema::Schema`].
//!
//! Documents never touch the filesystem. Loading lines is the job of
//! [`crate::source`].

mod errors;
mod reader;
mod record;
mod validation;

pub use errors::{DocumentError, DocumentResult, RecordError, RecordResult};
pub use reader::Document;
pub use record::Record;
pub use validation::{LineReport, ValidationReport};
