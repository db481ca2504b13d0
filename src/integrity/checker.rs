//! Primary/foreign key consistency check
//!
//! Check semantics:
//! - Primary keys are the trimmed values of one column of the primary data
//! - Duplicate primary keys collapse
//! - Every foreign value of every referenced record must be a primary key
//! - The first unmatched value ends the check
//!
//! Which referenced columns hold foreign values depends on [`KeyLookup`]. The
//! default reads the first `foreign_key_indices.len()` columns of each record,
//! using the indices only for their count. `KeyLookup::Declared` reads the
//! listed columns instead.

use std::collections::HashSet;

use serde::Serialize;

use super::errors::{CheckError, CheckResult};
use crate::document::Document;

/// How foreign-key columns are located in referenced records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyLookup {
    /// Columns `0..foreign_key_indices.len()`
    #[default]
    Positional,
    /// The columns listed in `foreign_key_indices`
    Declared,
}

/// Outcome of a completed integrity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IntegrityReport {
    /// Every foreign value has a matching primary key
    Consistent {
        /// Distinct primary keys
        primary_keys: usize,
        /// Foreign values looked up
        checked: usize,
    },
    /// A foreign value has no matching primary key
    Unmatched {
        value: String,
        /// 0-based index among the referenced records
        record: usize,
        column: usize,
    },
}

impl IntegrityReport {
    /// Returns true if the check passed
    pub fn passed(&self) -> bool {
        matches!(self, IntegrityReport::Consistent { .. })
    }

    /// The value without a primary key, if the check failed
    pub fn unmatched_value(&self) -> Option<&str> {
        match self {
            IntegrityReport::Consistent { .. } => None,
            IntegrityReport::Unmatched { value, .. } => Some(value),
        }
    }
}

/// Checks that the foreign keys of a referenced document resolve against the
/// primary keys of a primary document.
///
/// The primary document plays the "one" side of a one-to-many relation; the
/// referenced document is the "many" side.
pub struct ReferentialIntegrityChecker<'a> {
    primary: &'a Document,
    referenced: &'a Document,
    primary_key_index: usize,
    foreign_key_indices: Vec<usize>,
    lookup: KeyLookup,
}

impl<'a> ReferentialIntegrityChecker<'a> {
    /// Creates a checker with positional foreign-key lookup.
    pub fn new(
        primary: &'a Document,
        referenced: &'a Document,
        primary_key_index: usize,
        foreign_key_indices: Vec<usize>,
    ) -> Self {
        Self {
            primary,
            referenced,
            primary_key_index,
            foreign_key_indices,
            lookup: KeyLookup::default(),
        }
    }

    /// Sets how foreign-key columns are located.
    pub fn with_lookup(mut self, lookup: KeyLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Runs the check.
    ///
    /// # Errors
    ///
    /// Returns `CheckError` if either document cannot produce its records, or
    /// if a key column is out of range for some record.
    pub fn check(&self) -> CheckResult<IntegrityReport> {
        let primary_keys = self.primary_keys()?;
        let referenced = self.referenced.data().map_err(CheckError::Referenced)?;

        let mut checked = 0;
        for (record_index, record) in referenced.iter().enumerate() {
            for position in 0..self.foreign_key_indices.len() {
                let column = match self.lookup {
                    KeyLookup::Positional => position,
                    KeyLookup::Declared => self.foreign_key_indices[position],
                };

                let value = record
                    .get_string(column)
                    .map_err(|source| CheckError::ForeignKey {
                        record: record_index,
                        source,
                    })?;

                if !primary_keys.contains(value) {
                    return Ok(IntegrityReport::Unmatched {
                        value: value.to_string(),
                        record: record_index,
                        column,
                    });
                }
                checked += 1;
            }
        }

        Ok(IntegrityReport::Consistent {
            primary_keys: primary_keys.len(),
            checked,
        })
    }

    fn primary_keys(&self) -> CheckResult<HashSet<String>> {
        let records = self.primary.data().map_err(CheckError::Primary)?;

        records
            .iter()
            .enumerate()
            .map(|(record_index, record)| {
                record
                    .get_string(self.primary_key_index)
                    .map(str::to_string)
                    .map_err(|source| CheckError::PrimaryKey {
                        record: record_index,
                        source,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentError, RecordError};

    fn ranking() -> Document {
        Document::from_text(
            "{Integer,String}\n\
             # rank, club\n\
             {1, A}\n\
             {2, B}\n\
             {3, B}",
        )
    }

    fn matches(lines: &str) -> Document {
        Document::from_text(&format!("{{String,String,Integer}}\n{lines}"))
    }

    #[test]
    fn test_all_keys_found() {
        let primary = ranking();
        let referenced = matches("{A, B, 1}\n{B, A, 0}");
        let report = ReferentialIntegrityChecker::new(&primary, &referenced, 1, vec![0, 1])
            .check()
            .unwrap();

        assert!(report.passed());
        assert_eq!(
            report,
            IntegrityReport::Consistent {
                primary_keys: 2,
                checked: 4
            }
        );
    }

    #[test]
    fn test_unmatched_value_reported() {
        let primary = ranking();
        let referenced = matches("{A, B, 1}\n{C, A, 0}\n{D, A, 0}");
        let report = ReferentialIntegrityChecker::new(&primary, &referenced, 1, vec![0, 1])
            .check()
            .unwrap();

        assert!(!report.passed());
        assert_eq!(report.unmatched_value(), Some("C"));
        assert_eq!(
            report,
            IntegrityReport::Unmatched {
                value: "C".into(),
                record: 1,
                column: 0
            }
        );
    }

    #[test]
    fn test_positional_lookup_ignores_index_values() {
        let primary = ranking();
        // column 2 holds a score that is never a club
        let referenced = matches("{A, B, 7}");
        let report = ReferentialIntegrityChecker::new(&primary, &referenced, 1, vec![1, 2])
            .check()
            .unwrap();

        // reads columns 0 and 1, not 1 and 2
        assert!(report.passed());
    }

    #[test]
    fn test_declared_lookup_uses_index_values() {
        let primary = ranking();
        let referenced = matches("{A, B, 7}");
        let report = ReferentialIntegrityChecker::new(&primary, &referenced, 1, vec![1, 2])
            .with_lookup(KeyLookup::Declared)
            .check()
            .unwrap();

        assert_eq!(
            report,
            IntegrityReport::Unmatched {
                value: "7".into(),
                record: 0,
                column: 2
            }
        );
    }

    #[test]
    fn test_no_foreign_keys_always_passes() {
        let primary = ranking();
        let referenced = matches("{Z, Z, 0}");
        let report = ReferentialIntegrityChecker::new(&primary, &referenced, 1, Vec::new())
            .check()
            .unwrap();
        assert!(report.passed());
    }

    #[test]
    fn test_primary_key_out_of_range() {
        let primary = ranking();
        let referenced = matches("{A, B, 1}");
        let err = ReferentialIntegrityChecker::new(&primary, &referenced, 5, vec![0])
            .check()
            .unwrap_err();

        assert_eq!(
            err,
            CheckError::PrimaryKey {
                record: 0,
                source: RecordError::IndexOutOfBounds { index: 5, len: 2 },
            }
        );
    }

    #[test]
    fn test_foreign_key_out_of_range() {
        let primary = ranking();
        let referenced = matches("{A}");
        let err = ReferentialIntegrityChecker::new(&primary, &referenced, 1, vec![0, 1])
            .check()
            .unwrap_err();
        assert_eq!(err.code(), "SJON_INTEGRITY_FOREIGN_KEY");
    }

    #[test]
    fn test_document_errors_are_attributed() {
        let empty = Document::default();
        let referenced = matches("{A, B, 1}");

        let err = ReferentialIntegrityChecker::new(&empty, &referenced, 0, vec![0])
            .check()
            .unwrap_err();
        assert_eq!(err, CheckError::Primary(DocumentError::MissingSchemaLine));

        let primary = ranking();
        let err = ReferentialIntegrityChecker::new(&primary, &empty, 1, vec![0])
            .check()
            .unwrap_err();
        assert_eq!(err, CheckError::Referenced(DocumentError::MissingSchemaLine));
    }

    #[test]
    fn test_report_serialization() {
        let report = IntegrityReport::Unmatched {
            value: "C".into(),
            record: 3,
            column: 1,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "unmatched");
        assert_eq!(value["value"], "C");
    }
}
