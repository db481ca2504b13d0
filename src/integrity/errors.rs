//! Integrity check failures
//!
//! An unmatched foreign value is not an error; it is reported through
//! [`super::IntegrityReport::Unmatched`]. The errors here mean the check could
//! not run to completion.

use thiserror::Error;

use crate::document::{DocumentError, RecordError};

/// Result type for integrity checks
pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("primary document: {0}")]
    Primary(#[source] DocumentError),

    #[error("referenced document: {0}")]
    Referenced(#[source] DocumentError),

    /// Primary key column missing from a primary record
    #[error("primary record {record}: {source}")]
    PrimaryKey {
        record: usize,
        #[source]
        source: RecordError,
    },

    /// Foreign key column missing from a referenced record
    #[error("referenced record {record}: {source}")]
    ForeignKey {
        record: usize,
        #[source]
        source: RecordError,
    },
}

impl CheckError {
    /// Returns the stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::Primary(_) => "SJON_INTEGRITY_PRIMARY_DOCUMENT",
            CheckError::Referenced(_) => "SJON_INTEGRITY_REFERENCED_DOCUMENT",
            CheckError::PrimaryKey { .. } => "SJON_INTEGRITY_PRIMARY_KEY",
            CheckError::ForeignKey { .. } => "SJON_INTEGRITY_FOREIGN_KEY",
        }
    }
}
