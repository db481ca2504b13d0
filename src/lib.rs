//! sjon - Reader and validator for SJON record files
//!
//! SJON is a line-oriented tabular format: a schema line, then comment lines
//! and brace-delimited data records.
//!
//! ```text
//! {String,String,Integer}
//! # home, away, goals
//! {Team One, Team Two, 3}
//! ```
//!
//! # Usage
//!
//! ```
//! use sjon::document::Document;
//!
//! let doc = Document::from_text("{String,String,Integer}\n# note\n{Team One, Team Two, 3}");
//! let schema = doc.schema().unwrap();
//! let data = doc.data().unwrap();
//!
//! assert!(schema.conforms(doc.raw_data().unwrap()[0]));
//! assert_eq!(data[0].get_string(0).unwrap(), "Team One");
//! assert_eq!(data[0].get_int(2).unwrap(), 3);
//! ```

pub mod cli;
pub mod document;
pub mod integrity;
pub mod observability;
pub mod schema;
pub mod source;
pub mod syntax;
