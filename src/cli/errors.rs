//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::document::DocumentError;
use crate::integrity::CheckError;
use crate::source::SourceError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Resource configuration error
    ConfigError,
    /// Input file or resource could not be loaded
    SourceError,
    /// Document could not be parsed
    DocumentError,
    /// Integrity check could not run
    CheckError,
    /// I/O error (stdout)
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SJON_CLI_CONFIG_ERROR",
            Self::SourceError => "SJON_CLI_SOURCE_ERROR",
            Self::DocumentError => "SJON_CLI_DOCUMENT_ERROR",
            Self::CheckError => "SJON_CLI_CHECK_ERROR",
            Self::IoError => "SJON_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        let code = match e {
            SourceError::InvalidConfig { .. } => CliErrorCode::ConfigError,
            _ => CliErrorCode::SourceError,
        };
        Self::new(code, format!("[{}] {}", e.code(), e))
    }
}

impl From<DocumentError> for CliError {
    fn from(e: DocumentError) -> Self {
        Self::new(CliErrorCode::DocumentError, format!("[{}] {}", e.code(), e))
    }
}

impl From<CheckError> for CliError {
    fn from(e: CheckError) -> Self {
        Self::new(CliErrorCode::CheckError, format!("[{}] {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
