//! Record conformance checks
//!
//! Conformance semantics:
//! - The line starts with `{` and contains a `}`
//! - The value count equals the schema arity
//! - Every value lexically matches its positional column type
//!
//! Values are checked in column order and the first mismatch decides the
//! outcome. Unrecognized column types pass and leave a diagnostic behind.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::errors::{Diagnostic, Violation};
use super::types::{ColumnType, Schema, DATE_FORMAT};
use crate::syntax::{self, RECORD_CLOSE, RECORD_OPEN};

fn integer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("integer pattern compiles"))
}

fn string_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z[:space:]]+$").expect("string pattern compiles"))
}

// Decimal and exponent forms with an optional `f`/`d` suffix, or the exact
// spellings `NaN` and `Infinity`.
fn double_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:(?P<special>[+-]?(?:NaN|Infinity))|(?P<number>[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)[fFdD]?)$",
        )
        .expect("double pattern compiles")
    })
}

/// Parses a trimmed `Double` value.
///
/// Lowercase `inf`/`nan` and other spellings outside the grammar are rejected.
pub(crate) fn parse_double(trimmed: &str) -> Option<f64> {
    let captures = double_pattern().captures(trimmed)?;
    let literal = captures
        .name("special")
        .or_else(|| captures.name("number"))?
        .as_str();
    literal.parse().ok()
}

/// Outcome of checking one value against one column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCheck {
    /// Value is lexically valid for the type
    Match,
    /// Value is not valid for the type
    Mismatch,
    /// Type is unknown; the value is let through
    Unrecognized,
}

impl TypeCheck {
    /// Returns true unless the value was rejected
    pub fn passes(self) -> bool {
        !matches!(self, TypeCheck::Mismatch)
    }
}

impl ColumnType {
    /// Checks the lexical shape of a raw value.
    ///
    /// Surrounding whitespace is ignored for every type.
    pub fn check(&self, value: &str) -> TypeCheck {
        let trimmed = syntax::trim_value(value);
        let valid = match self {
            ColumnType::Integer => integer_pattern().is_match(trimmed),
            ColumnType::String => string_pattern().is_match(trimmed),
            ColumnType::Double => parse_double(trimmed).is_some(),
            ColumnType::Date => NaiveDate::parse_from_str(trimmed, DATE_FORMAT).is_ok(),
            ColumnType::Unrecognized(_) => return TypeCheck::Unrecognized,
        };

        if valid {
            TypeCheck::Match
        } else {
            TypeCheck::Mismatch
        }
    }
}

/// Result of checking one raw line against a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conformance {
    #[serde(skip_serializing_if = "Option::is_none")]
    violation: Option<Violation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<Diagnostic>,
}

impl Conformance {
    fn violated(violation: Violation, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            violation: Some(violation),
            diagnostics,
        }
    }

    /// Returns true if the line conforms
    pub fn conforms(&self) -> bool {
        self.violation.is_none()
    }

    /// Why the line does not conform, if it doesn't
    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    /// Informational findings gathered while checking
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Schema {
    /// Checks a raw line against this schema and reports why it fails.
    pub fn check(&self, raw_line: &str) -> Conformance {
        if !raw_line.starts_with(RECORD_OPEN) || !raw_line.contains(RECORD_CLOSE) {
            return Conformance::violated(
                Violation::Structural {
                    line: raw_line.to_string(),
                },
                Vec::new(),
            );
        }

        let values = syntax::record_body(raw_line)
            .map(syntax::split_values)
            .unwrap_or_default();

        if values.len() != self.arity() {
            return Conformance::violated(
                Violation::Arity {
                    expected: self.arity(),
                    actual: values.len(),
                },
                Vec::new(),
            );
        }

        let mut diagnostics = Vec::new();
        for (column, (value, column_type)) in values.iter().zip(self.columns()).enumerate() {
            match column_type.check(value) {
                TypeCheck::Match => {}
                TypeCheck::Unrecognized => diagnostics.push(Diagnostic::UnknownType {
                    column,
                    type_name: column_type.name().to_string(),
                }),
                TypeCheck::Mismatch => {
                    return Conformance::violated(
                        Violation::TypeMismatch {
                            column,
                            expected: column_type.name().to_string(),
                            value: (*value).to_string(),
                        },
                        diagnostics,
                    );
                }
            }
        }

        Conformance {
            violation: None,
            diagnostics,
        }
    }

    /// Returns true if the raw line conforms to this schema.
    pub fn conforms(&self, raw_line: &str) -> bool {
        self.check(raw_line).conforms()
    }

    /// Returns true if `value` is lexically valid for the type named `type_name`.
    ///
    /// Unknown type names always pass. Use [`ColumnType::check`] to tell an
    /// unknown type apart from a match; [`Schema::check`] turns that into a
    /// [`Diagnostic`].
    pub fn is_data_of_expected_type(value: &str, type_name: &str) -> bool {
        ColumnType::from_name(type_name).check(value).passes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_schema() -> Schema {
        Schema::new(["String", "String", "Integer"])
    }

    #[test]
    fn test_conforming_record() {
        let schema = scores_schema();
        let result = schema.check("{Team One, Team Two, 3}");
        assert!(result.conforms());
        assert!(result.violation().is_none());
        assert!(result.diagnostics().is_empty());
    }

    #[test]
    fn test_missing_open_brace_is_structural() {
        let schema = scores_schema();
        let result = schema.check("Team One, Team Two, 3}");
        assert!(!result.conforms());
        assert_eq!(result.violation().unwrap().code(), "SJON_SCHEMA_STRUCTURAL");
    }

    #[test]
    fn test_missing_close_brace_is_structural() {
        let schema = scores_schema();
        assert!(!schema.conforms("{Team One, Team Two, 3"));
        assert!(!schema.conforms(""));
    }

    #[test]
    fn test_arity_mismatch() {
        let schema = scores_schema();
        let result = schema.check("{Team One, 3}");
        assert_eq!(
            result.violation(),
            Some(&Violation::Arity {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_trailing_separator_drops_empty_value() {
        let schema = Schema::new(["String", "String"]);
        assert!(schema.conforms("{Alpha,Beta,}"));
    }

    #[test]
    fn test_value_after_first_close_is_ignored() {
        let schema = Schema::new(["Integer"]);
        assert!(schema.conforms("{12} ,x}"));
    }

    #[test]
    fn test_first_mismatch_reported() {
        let schema = scores_schema();
        let result = schema.check("{Team 1, Team 2, x}");
        assert_eq!(
            result.violation(),
            Some(&Violation::TypeMismatch {
                column: 0,
                expected: "String".into(),
                value: "Team 1".into(),
            })
        );
    }

    #[test]
    fn test_integer_rule() {
        assert!(Schema::is_data_of_expected_type("42", "Integer"));
        assert!(Schema::is_data_of_expected_type("  007 ", "Integer"));
        assert!(!Schema::is_data_of_expected_type("-3", "Integer"));
        assert!(!Schema::is_data_of_expected_type("+3", "Integer"));
        assert!(!Schema::is_data_of_expected_type("12.5", "Integer"));
        assert!(!Schema::is_data_of_expected_type("", "Integer"));
        assert!(!Schema::is_data_of_expected_type("1 2", "Integer"));
    }

    #[test]
    fn test_string_rule() {
        assert!(Schema::is_data_of_expected_type("Real Madrid", "String"));
        assert!(Schema::is_data_of_expected_type(" Bayern ", "String"));
        assert!(!Schema::is_data_of_expected_type("Schalke 04", "String"));
        assert!(!Schema::is_data_of_expected_type("St. Pauli", "String"));
        assert!(!Schema::is_data_of_expected_type("   ", "String"));
    }

    #[test]
    fn test_double_rule() {
        assert!(Schema::is_data_of_expected_type("12.5", "Double"));
        assert!(Schema::is_data_of_expected_type(" 3 ", "Double"));
        assert!(Schema::is_data_of_expected_type("-1e-3", "Double"));
        assert!(!Schema::is_data_of_expected_type("twelve", "Double"));
        assert!(!Schema::is_data_of_expected_type("1,5", "Double"));
        assert!(!Schema::is_data_of_expected_type("", "Double"));
    }

    #[test]
    fn test_double_accepts_only_exact_non_finite_spellings() {
        for value in ["NaN", "Infinity", "-Infinity", "+Infinity"] {
            assert!(Schema::is_data_of_expected_type(value, "Double"), "{}", value);
        }
        for value in ["inf", "-inf", "nan", "infinity", "INF", "NAN", "Inf"] {
            assert!(!Schema::is_data_of_expected_type(value, "Double"), "{}", value);
        }
        assert!(!Schema::new(["Double"]).conforms("{inf}"));
        assert!(!Schema::new(["Double"]).conforms("{nan}"));
    }

    #[test]
    fn test_double_decimal_forms() {
        assert_eq!(parse_double("1."), Some(1.0));
        assert_eq!(parse_double(".5"), Some(0.5));
        assert_eq!(parse_double("2.5e2"), Some(250.0));
        assert_eq!(parse_double("7d"), Some(7.0));
        assert_eq!(parse_double("1.5F"), Some(1.5));
        assert_eq!(parse_double("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_double("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_double("."), None);
        assert_eq!(parse_double("1e"), None);
        assert_eq!(parse_double("NaNd"), None);
        assert_eq!(parse_double("0x1p3"), None);
    }

    #[test]
    fn test_unicode_space_is_part_of_value() {
        assert!(!Schema::is_data_of_expected_type("\u{a0}Alpha", "String"));
        assert!(!Schema::is_data_of_expected_type("7\u{2003}", "Integer"));
        assert!(Schema::is_data_of_expected_type("\tAlpha ", "String"));
    }

    #[test]
    fn test_unknown_type_reported_by_column_check() {
        assert_eq!(
            ColumnType::from_name("Currency").check("12 EUR"),
            TypeCheck::Unrecognized
        );
        assert!(TypeCheck::Unrecognized.passes());
        assert!(!TypeCheck::Mismatch.passes());
    }

    #[test]
    fn test_date_rule() {
        assert!(Schema::is_data_of_expected_type("2014-05-24", "Date"));
        assert!(Schema::is_data_of_expected_type(" 2013-09-17 ", "Date"));
        assert!(!Schema::is_data_of_expected_type("2014-02-30", "Date"));
        assert!(!Schema::is_data_of_expected_type("24/05/2014", "Date"));
    }

    #[test]
    fn test_unknown_type_passes_with_diagnostic() {
        assert!(Schema::is_data_of_expected_type("anything at all", "Currency"));

        let schema = Schema::new(["Currency", "Integer"]);
        let result = schema.check("{12 EUR, 7}");
        assert!(result.conforms());
        assert_eq!(
            result.diagnostics(),
            &[Diagnostic::UnknownType {
                column: 0,
                type_name: "Currency".into(),
            }]
        );
    }

    #[test]
    fn test_diagnostics_kept_on_later_mismatch() {
        let schema = Schema::new(["Currency", "Integer"]);
        let result = schema.check("{12 EUR, seven}");
        assert!(!result.conforms());
        assert_eq!(result.diagnostics().len(), 1);
    }

    #[test]
    fn test_integer_column_rejects_decimal() {
        let schema = Schema::new(["Integer"]);
        assert!(!schema.conforms("{12.5}"));
    }

    #[test]
    fn test_check_is_deterministic() {
        let schema = scores_schema();
        let first = schema.check("{Team One, Team Two, x}");
        for _ in 0..10 {
            assert_eq!(schema.check("{Team One, Team Two, x}"), first);
        }
    }
}
