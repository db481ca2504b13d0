//! Document and record error types
//!
//! Error codes:
//! - SJON_RECORD_MALFORMED_BOUNDARY
//! - SJON_RECORD_INDEX_OUT_OF_BOUNDS
//! - SJON_RECORD_INVALID_INTEGER
//! - SJON_RECORD_INVALID_DOUBLE
//! - SJON_RECORD_INVALID_DATE
//! - SJON_DOCUMENT_EMPTY
//! - SJON_DOCUMENT_MISSING_SCHEMA_LINE
//! - SJON_DOCUMENT_MALFORMED_SCHEMA_LINE
//! - SJON_DOCUMENT_RECORD (wraps a record error)

use std::num::ParseIntError;

use thiserror::Error;

/// Result type for record access
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Hard failures of record parsing and typed getters.
///
/// Getters do not consult the schema; a conversion error here means the caller
/// read a value that was never validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record '{line}' has no closing brace")]
    MalformedBoundary { line: String },

    #[error("column {index} out of bounds for record with {len} values")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("column {index}: '{value}' is not an integer: {source}")]
    InvalidInteger {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("column {index}: '{value}' is not a double")]
    InvalidDouble { index: usize, value: String },

    #[error("column {index}: '{value}' is not a date: {source}")]
    InvalidDate {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl RecordError {
    /// Returns the stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RecordError::MalformedBoundary { .. } => "SJON_RECORD_MALFORMED_BOUNDARY",
            RecordError::IndexOutOfBounds { .. } => "SJON_RECORD_INDEX_OUT_OF_BOUNDS",
            RecordError::InvalidInteger { .. } => "SJON_RECORD_INVALID_INTEGER",
            RecordError::InvalidDouble { .. } => "SJON_RECORD_INVALID_DOUBLE",
            RecordError::InvalidDate { .. } => "SJON_RECORD_INVALID_DATE",
        }
    }

    /// Returns true for failed value conversions
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidInteger { .. }
                | RecordError::InvalidDouble { .. }
                | RecordError::InvalidDate { .. }
        )
    }
}

/// Failures deriving views from a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// No lines at all, so no schema line
    #[error("document is empty")]
    Empty,

    /// Every line is a comment
    #[error("document has no schema line: every line is a comment")]
    MissingSchemaLine,

    /// The first line is too short to hold `{...}`
    #[error("malformed schema line '{line}'")]
    MalformedSchemaLine { line: String },

    /// A data line could not be turned into a record
    #[error("line {line}: {source}")]
    Record {
        /// 1-based physical line number
        line: usize,
        #[source]
        source: RecordError,
    },
}

impl DocumentError {
    /// Returns the stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::Empty => "SJON_DOCUMENT_EMPTY",
            DocumentError::MissingSchemaLine => "SJON_DOCUMENT_MISSING_SCHEMA_LINE",
            DocumentError::MalformedSchemaLine { .. } => "SJON_DOCUMENT_MALFORMED_SCHEMA_LINE",
            DocumentError::Record { .. } => "SJON_DOCUMENT_RECORD",
        }
    }
}
