//! CLI module for sjon
//!
//! Provides command-line interface for:
//! - validate: Check data lines against the document schema
//! - inspect: Print schema and records as JSON
//! - check: Referential integrity between two documents

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, DocumentArg};
pub use commands::{check, inspect, load_config, run, run_command, validate, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
