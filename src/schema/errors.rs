//! Conformance findings for SJON records
//!
//! Codes:
//! - SJON_SCHEMA_STRUCTURAL (record boundary missing)
//! - SJON_SCHEMA_ARITY (value count differs from the schema)
//! - SJON_SCHEMA_TYPE_MISMATCH (value does not match its column type)
//! - SJON_SCHEMA_UNKNOWN_TYPE (informational, never fails a record)

use serde::Serialize;
use thiserror::Error;

/// Why a raw line does not conform to a schema.
///
/// Violations are values carried by a [`super::Conformance`], never returned
/// as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Line does not start with `{` or has no `}`
    #[error("syntax error: '{line}' is not enclosed in curly braces")]
    Structural { line: String },

    /// Number of values differs from the schema arity
    #[error("invalid number of values: expected {expected}, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// A value does not lexically match its declared column type
    #[error("column {column}: '{value}' is not a valid {expected}")]
    TypeMismatch {
        column: usize,
        expected: String,
        value: String,
    },
}

impl Violation {
    /// Returns the stable code for this violation
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Structural { .. } => "SJON_SCHEMA_STRUCTURAL",
            Violation::Arity { .. } => "SJON_SCHEMA_ARITY",
            Violation::TypeMismatch { .. } => "SJON_SCHEMA_TYPE_MISMATCH",
        }
    }
}

/// Informational findings that never make a record non-conforming.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The schema names a type this reader does not know; values pass unchecked
    #[error("column {column}: unknown type '{type_name}'")]
    UnknownType { column: usize, type_name: String },
}

impl Diagnostic {
    /// Returns the stable code for this diagnostic
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::UnknownType { .. } => "SJON_SCHEMA_UNKNOWN_TYPE",
        }
    }
}
