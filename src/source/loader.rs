//! File loading
//!
//! Reads a whole file into lines, then hands them to [`Document`]. Line
//! terminators (`\n`, `\r\n`) are stripped; everything else is kept verbatim.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::errors::{SourceError, SourceResult};
use crate::document::Document;
use crate::observability::Logger;

/// Reads every line of a file, in order.
pub fn load_lines(path: &Path) -> SourceResult<Vec<String>> {
    let unavailable = |source: io::Error| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(unavailable)
}

/// Loads a file as a document.
pub fn open_document(path: &Path) -> SourceResult<Document> {
    let document = Document::new(load_lines(path)?);

    Logger::info(
        "DOCUMENT_LOADED",
        &[
            ("comments", document.comments().len().to_string().as_str()),
            ("lines", document.raw_content().len().to_string().as_str()),
            ("path", path.display().to_string().as_str()),
        ],
    );

    Ok(document)
}
