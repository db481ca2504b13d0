//! Line classification for a loaded SJON document
//!
//! The lines of a document are either the schema line, comments or data:
//!
//! - The schema line is the first physical line, whatever it contains
//! - Comment lines start with `#`
//! - Every other line is data, except the first non-comment line, which is
//!   dropped as the schema line
//!
//! The two rules agree on ordinary files. They differ when the file starts
//! with a comment: `schema()` still reads the comment, while `raw_data()`
//! drops the first non-comment line.
//!
//! Views are derived on every call and never cached.

use super::errors::{DocumentError, DocumentResult};
use super::record::Record;
use super::validation::{LineReport, ValidationReport};
use crate::schema::Schema;
use crate::syntax;

/// The full content of one SJON source, line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Creates a document from its lines, in order.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Creates a document from text, splitting on `\n` and `\r\n`.
    pub fn from_text(text: &str) -> Self {
        text.lines().map(str::to_string).collect()
    }

    /// All lines, as loaded
    pub fn raw_content(&self) -> &[String] {
        &self.lines
    }

    /// Comment lines, in order
    pub fn comments(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| syntax::is_comment(line))
            .collect()
    }

    /// Raw data lines: comments removed, then the first remaining line dropped.
    pub fn raw_data(&self) -> DocumentResult<Vec<&str>> {
        Ok(self
            .numbered_data()?
            .into_iter()
            .map(|(_, line)| line)
            .collect())
    }

    /// Data lines parsed as records.
    pub fn data(&self) -> DocumentResult<Vec<Record>> {
        self.numbered_data()?
            .into_iter()
            .map(|(line, raw)| Record::parse(raw).map_err(|source| DocumentError::Record { line, source }))
            .collect()
    }

    /// Schema declared on the first physical line.
    ///
    /// The first and last characters are stripped as the enclosing braces and
    /// the rest is split into type names.
    pub fn schema(&self) -> DocumentResult<Schema> {
        let first = self.lines.first().ok_or(DocumentError::Empty)?;

        let mut chars = first.chars();
        if chars.next().is_none() || chars.next_back().is_none() {
            return Err(DocumentError::MalformedSchemaLine {
                line: first.clone(),
            });
        }

        Ok(Schema::new(syntax::split_values(chars.as_str())))
    }

    /// Checks every data line against the document's own schema.
    pub fn validate(&self) -> DocumentResult<ValidationReport> {
        let schema = self.schema()?;
        let lines = self
            .numbered_data()?
            .into_iter()
            .map(|(line, raw)| LineReport::new(line, schema.check(raw)))
            .collect();

        Ok(ValidationReport::new(schema, lines))
    }

    /// Data lines with their 1-based physical line numbers.
    fn numbered_data(&self) -> DocumentResult<Vec<(usize, &str)>> {
        let mut lines = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !syntax::is_comment(line))
            .map(|(index, line)| (index + 1, line.as_str()));

        if lines.next().is_none() {
            return Err(DocumentError::MissingSchemaLine);
        }

        Ok(lines.collect())
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
