//! Referential integrity between SJON documents
//!
//! SJON files declare no keys. Integrity is a semantic relation chosen by the
//! caller: every foreign-key value of a referenced document must appear among
//! the primary-key values of a primary document.

mod checker;
mod errors;

pub use checker::{IntegrityReport, KeyLookup, ReferentialIntegrityChecker};
pub use errors::{CheckError, CheckResult};
