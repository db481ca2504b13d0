//! Column types and schema definition
//!
//! Recognized type names:
//! - String: letters and whitespace
//! - Integer: unsigned decimal digits
//! - Double: floating point number
//! - Date: calendar date, `YYYY-MM-DD`
//!
//! Any other name is kept verbatim as an unrecognized type.

use serde::{Serialize, Serializer};

/// Calendar date layout accepted by `Date` columns
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A declared column type.
///
/// Type names are matched exactly: `" Integer"` with a leading space is an
/// unrecognized type, not an `Integer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Letters and whitespace
    String,
    /// Unsigned decimal digits
    Integer,
    /// Floating point number
    Double,
    /// Calendar date
    Date,
    /// Any other type name, kept as written
    Unrecognized(String),
}

impl ColumnType {
    /// Resolves a type name token from a schema line.
    pub fn from_name(name: &str) -> Self {
        match name {
            "String" => ColumnType::String,
            "Integer" => ColumnType::Integer,
            "Double" => ColumnType::Double,
            "Date" => ColumnType::Date,
            other => ColumnType::Unrecognized(other.to_string()),
        }
    }

    /// Returns the type name as written in the schema line
    pub fn name(&self) -> &str {
        match self {
            ColumnType::String => "String",
            ColumnType::Integer => "Integer",
            ColumnType::Double => "Double",
            ColumnType::Date => "Date",
            ColumnType::Unrecognized(name) => name,
        }
    }

    /// Returns false for type names this reader does not know
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ColumnType::Unrecognized(_))
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Ordered column types of one SJON document.
///
/// The arity is fixed at construction. A conforming record has exactly one
/// value per column, each lexically valid for its positional type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnType>,
}

impl Schema {
    /// Creates a schema from type name tokens, in column order.
    pub fn new<I, S>(column_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: column_types
                .into_iter()
                .map(|name| ColumnType::from_name(name.as_ref()))
                .collect(),
        }
    }

    /// Number of declared columns
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Declared column types, in order
    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Declared type of one column
    pub fn column(&self, index: usize) -> Option<&ColumnType> {
        self.columns.get(index)
    }

    /// Declared type names, in order
    pub fn type_names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnType::name).collect()
    }
}
