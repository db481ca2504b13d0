//! Document Invariant Tests
//!
//! Tests for SJON line classification and typed access:
//! - The schema line is never data
//! - Comment lines are never data
//! - Conformance is total and deterministic
//! - Getters fail loudly instead of defaulting

use sjon::document::{Document, DocumentError, Record, RecordError};
use sjon::schema::{Schema, Violation};
use sjon::source;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const SCORES: &str = "\
{String,String,Integer,Integer}
# UEFA Champions League 2013/14, group stage
# home, away, home goals, away goals
{Manchester United, Bayer Leverkusen, 4, 2}
{Real Madrid, Galatasaray, 4, 1}
# matchday 2
{Galatasaray, Juventus, 2, 2}
{Bayer Leverkusen, Real Sociedad, 2, 1}
";

fn write_fixture(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    (tmp, path)
}

// =============================================================================
// Line Classification Tests
// =============================================================================

/// raw_data = raw_content - comments - schema line.
#[test]
fn test_raw_data_count() {
    let (_tmp, path) = write_fixture("scores.sjon", SCORES);
    let doc = source::open_document(&path).unwrap();

    let raw_content = doc.raw_content().len();
    let comments = doc.comments().len();
    assert_eq!(raw_content, 8);
    assert_eq!(comments, 3);
    assert_eq!(doc.raw_data().unwrap().len(), raw_content - comments - 1);
}

/// Comments are excluded wherever they appear.
#[test]
fn test_comments_never_data() {
    let doc = Document::from_text(SCORES);
    for line in doc.raw_data().unwrap() {
        assert!(!line.starts_with('#'));
    }
}

/// The end-to-end scenario from a three-line file.
#[test]
fn test_minimal_document() {
    let doc = Document::from_text("{String,String,Integer}\n# note\n{Team One, Team Two, 3}");

    assert_eq!(doc.raw_content().len(), 3);
    assert_eq!(doc.raw_data().unwrap().len(), 1);

    let data = doc.data().unwrap();
    assert_eq!(data[0].get_string(0).unwrap(), "Team One");
    assert_eq!(data[0].get_int(2).unwrap(), 3);
}

/// A document of comments only cannot drop a schema line.
#[test]
fn test_comment_only_document() {
    let doc = Document::from_text("# nothing\n# here");
    assert_eq!(doc.raw_data().unwrap_err(), DocumentError::MissingSchemaLine);
}

// =============================================================================
// Schema Tests
// =============================================================================

/// Schema line is parsed into type names, in order.
#[test]
fn test_schema_parsing() {
    let doc = Document::from_text("{String,Integer,Double}");
    let schema = doc.schema().unwrap();
    assert_eq!(schema.arity(), 3);
    assert_eq!(schema.type_names(), vec!["String", "Integer", "Double"]);
}

/// Every record of a well-formed file conforms to its schema.
#[test]
fn test_fixture_conforms() {
    let doc = Document::from_text(SCORES);
    let schema = doc.schema().unwrap();
    for line in doc.raw_data().unwrap() {
        assert!(schema.conforms(line), "line should conform: {}", line);
    }
    assert!(doc.validate().unwrap().is_valid());
}

/// Lines without braces never conform, whatever the schema.
#[test]
fn test_unbraced_lines_never_conform() {
    let schemas = [
        Schema::new(["String"]),
        Schema::new(["Integer", "Integer"]),
        Schema::new(["Anything"]),
        Schema::new(Vec::<String>::new()),
    ];
    let lines = ["", "abc", "a,b}", " {a}", "{a,b", "{", "}"];

    for schema in &schemas {
        for line in lines {
            let result = schema.check(line);
            assert!(!result.conforms());
            assert!(matches!(
                result.violation(),
                Some(Violation::Structural { .. })
            ));
        }
    }
}

/// A decimal never conforms to Integer, and get_int refuses it.
#[test]
fn test_integer_boundary() {
    let schema = Schema::new(["Integer"]);
    assert!(!schema.conforms("{12.5}"));

    let record = Record::parse("{12.5}").unwrap();
    let err = record.get_int(0).unwrap_err();
    assert!(matches!(err, RecordError::InvalidInteger { index: 0, .. }));
}

/// Unknown types never make a record fail.
#[test]
fn test_unknown_types_are_permissive() {
    let doc = Document::from_text("{Country,Integer}\n{ESP, 1}\n{??, 2}");
    let report = doc.validate().unwrap();
    assert!(report.is_valid());
    assert_eq!(report.diagnostics().count(), 2);
}

/// Validation keeps going after a failing line.
#[test]
fn test_validation_never_aborts_batch() {
    let doc = Document::from_text(
        "{String,Integer}\n\
         broken line\n\
         {Alpha}\n\
         {Beta, x}\n\
         {Gamma, 3}",
    );
    let report = doc.validate().unwrap();
    assert_eq!(report.lines().len(), 4);
    assert_eq!(report.conforming_count(), 1);

    let codes: Vec<&str> = report
        .failures()
        .map(|line| line.conformance().violation().unwrap().code())
        .collect();
    assert_eq!(
        codes,
        vec![
            "SJON_SCHEMA_STRUCTURAL",
            "SJON_SCHEMA_ARITY",
            "SJON_SCHEMA_TYPE_MISMATCH"
        ]
    );
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Derived views are identical across calls.
#[test]
fn test_views_are_deterministic() {
    let doc = Document::from_text(SCORES);

    let raw_data = doc.raw_data().unwrap();
    let data = doc.data().unwrap();
    let schema = doc.schema().unwrap();
    let report = doc.validate().unwrap();

    for _ in 0..100 {
        assert_eq!(doc.raw_data().unwrap(), raw_data);
        assert_eq!(doc.data().unwrap(), data);
        assert_eq!(doc.schema().unwrap(), schema);
        assert_eq!(doc.validate().unwrap(), report);
    }
}

// =============================================================================
// Record Access Tests
// =============================================================================

/// values() keeps order and raw text.
#[test]
fn test_record_values_order() {
    let record = Record::parse("{a,b,c}").unwrap();
    assert_eq!(record.values(), &["a", "b", "c"]);
}

/// Out-of-range access is an error for every getter.
#[test]
fn test_getters_bounds_checked() {
    let data = Document::from_text(SCORES).data().unwrap();
    let record = &data[0];

    assert!(record.get_string(4).is_err());
    assert!(record.get_int(4).is_err());
    assert!(record.get_double(4).is_err());
    assert!(record.get_date(4).is_err());
}

/// Goals can be read as integers and doubles.
#[test]
fn test_numeric_getters_on_fixture() {
    let data = Document::from_text(SCORES).data().unwrap();
    let total: i64 = data
        .iter()
        .map(|record| record.get_int(2).unwrap() + record.get_int(3).unwrap())
        .sum();
    assert_eq!(total, 18);
    assert_eq!(data[1].get_double(3).unwrap(), 1.0);
}
