//! CLI argument definitions using clap
//!
//! Commands:
//! - sjon validate <FILE> | --resource <NAME>
//! - sjon inspect <FILE> | --resource <NAME>
//! - sjon check <PRIMARY> <REFERENCED> --primary-key <N> --foreign-keys <I,J,...>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sjon - Reader and validator for SJON record files
#[derive(Parser, Debug)]
#[command(name = "sjon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to resource configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Where a single document comes from
#[derive(Args, Debug, Clone)]
pub struct DocumentArg {
    /// Path to an SJON file
    #[arg(required_unless_present = "resource", conflicts_with = "resource")]
    pub file: Option<PathBuf>,

    /// Name of a configured resource
    #[arg(long)]
    pub resource: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every data line against the document's schema
    Validate {
        #[command(flatten)]
        document: DocumentArg,
    },

    /// Print the schema and the records of a document
    Inspect {
        #[command(flatten)]
        document: DocumentArg,
    },

    /// Check that foreign keys resolve against primary keys
    Check {
        /// Primary document: a path, or @name for a configured resource
        primary: String,

        /// Referenced document: a path, or @name for a configured resource
        referenced: String,

        /// Primary key column in the primary document
        #[arg(long)]
        primary_key: usize,

        /// Foreign key columns in the referenced document
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        foreign_keys: Vec<usize>,

        /// Read the listed foreign key columns instead of the leading ones
        #[arg(long)]
        declared: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
