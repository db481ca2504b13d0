//! sjon CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and maps the outcome to an
//! exit code:
//! - 0: the command succeeded and the input passed its check
//! - 1: the input failed its check, or the command could not run

use sjon::cli;

fn main() {
    match cli::run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
