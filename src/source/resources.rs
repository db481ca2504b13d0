//! Logical resource names
//!
//! Callers refer to data files by name ("scores", "ranking") instead of by
//! path. The mapping lives in a JSON config file:
//!
//! ```json
//! {
//!   "data_root": "./resources/data",
//!   "resources": {
//!     "scores": "reference scores.sjon",
//!     "ranking": "uefa ranking 2013_14 mixed.sjon"
//!   }
//! }
//! ```
//!
//! File names are joined to `data_root`; relative roots are resolved against
//! the working directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{SourceError, SourceResult};
use super::loader;
use crate::document::Document;
use crate::observability::Logger;

/// Resource configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directory holding the data files (optional, default "./resources/data")
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    /// Resource name to file name, relative to `data_root`
    #[serde(default)]
    pub resources: BTreeMap<String, String>,
}

fn default_data_root() -> PathBuf {
    PathBuf::from("./resources/data")
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            resources: BTreeMap::new(),
        }
    }
}

impl ResourceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> SourceResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ResourceConfig =
            serde_json::from_str(&content).map_err(|e| SourceError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("invalid JSON: {}", e),
            })?;

        config.validate().map_err(|reason| SourceError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(config)
    }

    /// Adds or replaces a resource mapping.
    pub fn with_resource(mut self, name: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.resources.insert(name.into(), file_name.into());
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self.data_root.as_os_str().is_empty() {
            return Err("data_root must not be empty".into());
        }

        for (name, file_name) in &self.resources {
            if name.trim().is_empty() {
                return Err("resource names must not be empty".into());
            }
            if file_name.trim().is_empty() {
                return Err(format!("resource '{}' has an empty file name", name));
            }
        }

        Ok(())
    }
}

/// Maps resource names to paths and opens them as documents.
#[derive(Debug, Clone, Default)]
pub struct ResourceResolver {
    config: ResourceConfig,
}

impl ResourceResolver {
    pub fn new(config: ResourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    /// Returns the path of a named resource.
    pub fn resolve(&self, name: &str) -> SourceResult<PathBuf> {
        let file_name = self
            .config
            .resources
            .get(name)
            .ok_or_else(|| SourceError::UnknownResource(name.to_string()))?;

        let path = self.config.data_root.join(file_name);
        Logger::trace(
            "RESOURCE_RESOLVED",
            &[("name", name), ("path", path.display().to_string().as_str())],
        );
        Ok(path)
    }

    /// Loads a named resource as a document.
    pub fn open(&self, name: &str) -> SourceResult<Document> {
        loader::open_document(&self.resolve(name)?)
    }
}
