//! CLI command implementations
//!
//! Each command loads its documents, runs one library operation and prints a
//! single JSON object. Commands return `Ok(false)` when the input was read
//! but failed the check, so the caller can exit non-zero without treating it
//! as an error.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::document::Document;
use crate::integrity::{IntegrityReport, KeyLookup, ReferentialIntegrityChecker};
use crate::observability::Logger;
use crate::schema::Diagnostic;
use crate::source::{self, ResourceConfig, ResourceResolver};
use crate::syntax;

use super::args::{Cli, Command, DocumentArg};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Resource configuration used when `--config` is not given, if present
pub const DEFAULT_CONFIG_PATH: &str = "./sjon.json";

/// Prefix marking a `check` argument as a resource name
const RESOURCE_PREFIX: char = '@';

/// Parse arguments and run the selected command against stdout
pub fn run() -> CliResult<bool> {
    let cli = Cli::parse_args();
    run_command(cli, &mut io::stdout())
}

/// Run a parsed command, writing its JSON output to `out`
pub fn run_command<W: Write>(cli: Cli, out: &mut W) -> CliResult<bool> {
    let resolver = ResourceResolver::new(load_config(cli.config.as_deref())?);

    match cli.command {
        Command::Validate { document } => validate(&open(&resolver, &document)?, out),
        Command::Inspect { document } => inspect(&open(&resolver, &document)?, out),
        Command::Check {
            primary,
            referenced,
            primary_key,
            foreign_keys,
            declared,
        } => {
            let primary = open_input(&resolver, &primary)?;
            let referenced = open_input(&resolver, &referenced)?;
            let lookup = if declared {
                KeyLookup::Declared
            } else {
                KeyLookup::Positional
            };
            check(&primary, &referenced, primary_key, foreign_keys, lookup, out)
        }
    }
}

/// Load the resource configuration.
///
/// An explicit path must exist. Without one, `./sjon.json` is used when
/// present and the defaults otherwise.
pub fn load_config(path: Option<&Path>) -> CliResult<ResourceConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config_error(format!(
                    "config file '{}' not found",
                    path.display()
                )));
            }
            Ok(ResourceConfig::load(path)?)
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Ok(ResourceConfig::load(default_path)?)
            } else {
                Ok(ResourceConfig::default())
            }
        }
    }
}

fn open(resolver: &ResourceResolver, arg: &DocumentArg) -> CliResult<Document> {
    match (&arg.file, &arg.resource) {
        (_, Some(name)) => Ok(resolver.open(name)?),
        (Some(path), None) => Ok(source::open_document(path)?),
        (None, None) => Err(CliError::config_error("no document given")),
    }
}

fn open_input(resolver: &ResourceResolver, input: &str) -> CliResult<Document> {
    match input.strip_prefix(RESOURCE_PREFIX) {
        Some(name) => Ok(resolver.open(name)?),
        None => Ok(source::open_document(Path::new(input))?),
    }
}

/// Validate every data line of a document against its schema
pub fn validate<W: Write>(document: &Document, out: &mut W) -> CliResult<bool> {
    let report = document.validate()?;

    let mut failures = Vec::new();
    for line in report.failures() {
        if let Some(violation) = line.conformance().violation() {
            let line_number = line.line().to_string();
            Logger::warn(
                "RECORD_NONCONFORMING",
                &[
                    ("code", violation.code()),
                    ("detail", violation.to_string().as_str()),
                    ("line", line_number.as_str()),
                ],
            );
            failures.push(json!({
                "line": line.line(),
                "code": violation.code(),
                "message": violation.to_string(),
                "violation": violation,
            }));
        }
    }

    // One entry per column, not per line
    let unknown_types: BTreeSet<(usize, String)> = report
        .diagnostics()
        .map(|(_, diagnostic)| match diagnostic {
            Diagnostic::UnknownType { column, type_name } => (*column, type_name.clone()),
        })
        .collect();
    for (column, type_name) in &unknown_types {
        Logger::warn(
            "UNKNOWN_COLUMN_TYPE",
            &[("column", column.to_string().as_str()), ("type", type_name.as_str())],
        );
    }

    write_json(
        out,
        &json!({
            "schema": report.schema().type_names(),
            "data_lines": report.lines().len(),
            "conforming": report.conforming_count(),
            "valid": report.is_valid(),
            "failures": failures,
            "unknown_types": unknown_types
                .iter()
                .map(|(column, type_name)| json!({"column": column, "type": type_name}))
                .collect::<Vec<_>>(),
        }),
    )?;

    Ok(report.is_valid())
}

/// Print the schema, comment count and trimmed record values of a document
pub fn inspect<W: Write>(document: &Document, out: &mut W) -> CliResult<bool> {
    let schema = document.schema()?;
    let data = document.data()?;
    let records: Vec<Vec<&str>> = data
        .iter()
        .map(|record| record.values().iter().map(|v| syntax::trim_value(v)).collect())
        .collect();

    write_json(
        out,
        &json!({
            "schema": schema.type_names(),
            "lines": document.raw_content().len(),
            "comments": document.comments().len(),
            "records": records,
        }),
    )?;

    Ok(true)
}

/// Check that the foreign keys of `referenced` resolve against `primary`
pub fn check<W: Write>(
    primary: &Document,
    referenced: &Document,
    primary_key: usize,
    foreign_keys: Vec<usize>,
    lookup: KeyLookup,
    out: &mut W,
) -> CliResult<bool> {
    let report = ReferentialIntegrityChecker::new(primary, referenced, primary_key, foreign_keys)
        .with_lookup(lookup)
        .check()?;

    match &report {
        IntegrityReport::Consistent {
            primary_keys,
            checked,
        } => Logger::info(
            "INTEGRITY_CONSISTENT",
            &[
                ("checked", checked.to_string().as_str()),
                ("primary_keys", primary_keys.to_string().as_str()),
            ],
        ),
        IntegrityReport::Unmatched {
            value,
            record,
            column,
        } => Logger::warn(
            "INTEGRITY_UNMATCHED",
            &[
                ("column", column.to_string().as_str()),
                ("record", record.to_string().as_str()),
                ("value", value.as_str()),
            ],
        ),
    }

    write_json(out, &report)?;
    Ok(report.passed())
}
