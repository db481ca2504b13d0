//! Whole-document conformance report

use serde::Serialize;

use crate::schema::{Conformance, Diagnostic, Schema};

/// Conformance of one data line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    line: usize,
    #[serde(flatten)]
    conformance: Conformance,
}

impl LineReport {
    pub(crate) fn new(line: usize, conformance: Conformance) -> Self {
        Self { line, conformance }
    }

    /// 1-based physical line number
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn conformance(&self) -> &Conformance {
        &self.conformance
    }

    /// Returns true if the line conforms
    pub fn conforms(&self) -> bool {
        self.conformance.conforms()
    }
}

/// Conformance of every data line of a document against its schema.
///
/// Lines are checked independently; a failing line never stops the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    schema: Schema,
    lines: Vec<LineReport>,
}

impl ValidationReport {
    pub(crate) fn new(schema: Schema, lines: Vec<LineReport>) -> Self {
        Self { schema, lines }
    }

    /// Schema the lines were checked against
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// One entry per data line, in file order
    pub fn lines(&self) -> &[LineReport] {
        &self.lines
    }

    /// Lines that do not conform
    pub fn failures(&self) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(|report| !report.conforms())
    }

    /// Diagnostics of every line, with their line numbers
    pub fn diagnostics(&self) -> impl Iterator<Item = (usize, &Diagnostic)> {
        self.lines.iter().flat_map(|report| {
            report
                .conformance
                .diagnostics()
                .iter()
                .map(move |diagnostic| (report.line, diagnostic))
        })
    }

    /// Number of conforming lines
    pub fn conforming_count(&self) -> usize {
        self.lines.iter().filter(|report| report.conforms()).count()
    }

    /// Returns true if every data line conforms
    pub fn is_valid(&self) -> bool {
        self.lines.iter().all(LineReport::conforms)
    }
}
