//! Schema artifact source capability.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Where schema artifacts live. `exists` gates the skip path; `load`
/// failures after a positive `exists` surface as unexpected faults and
/// route the event to the error channel.
pub trait SchemaSource {
    fn exists(&self, path: &Path) -> bool;
    fn load(&self, path: &Path) -> Result<Value>;
}

/// Reads schema artifacts from the local filesystem.
#[derive(Debug, Default)]
pub struct FileSchemaSource;

impl FileSchemaSource {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaSource for FileSchemaSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<Value> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read schema artifact {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("schema artifact {} is not valid JSON", path.display()))
    }
}
