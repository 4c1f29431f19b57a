//! Checksum store capability consumed by the de-duplication filter.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;

/// Durable key-value store holding checksums already seen. Last-write-wins;
/// no transactional or compare-and-set guarantee is assumed. Entries are
/// never deleted by the pipeline — expiry, if any, belongs to the backing
/// store.
pub trait ChecksumStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// HashMap-backed store for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryChecksumStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryChecksumStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChecksumStore for InMemoryChecksumStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("checksum store mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("checksum store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
