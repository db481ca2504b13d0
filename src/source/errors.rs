//! Source error types
//!
//! Error codes:
//! - SJON_SOURCE_UNAVAILABLE (file missing or unreadable)
//! - SJON_SOURCE_UNKNOWN_RESOURCE (name not configured)
//! - SJON_SOURCE_INVALID_CONFIG (resource config cannot be used)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Failures producing lines for the parsing core.
///
/// These happen before any parsing begins.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{}': {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("invalid resource config '{}': {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },
}

impl SourceError {
    /// Returns the stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Unavailable { .. } => "SJON_SOURCE_UNAVAILABLE",
            SourceError::UnknownResource(_) => "SJON_SOURCE_UNKNOWN_RESOURCE",
            SourceError::InvalidConfig { .. } => "SJON_SOURCE_INVALID_CONFIG",
        }
    }
}
