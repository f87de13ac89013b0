use std::collections::HashMap;
use std::sync::RwLock;

use sha2::{Digest, Sha256};

use crate::models::Finding;

/// Hex SHA-256 of the exact UTF-8 bytes of `text`.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Backing store for analysis results keyed by fingerprint.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<Finding>>;
    fn put(&self, key: String, findings: Vec<Finding>);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-process store. Entries live until the process exits.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<Finding>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<Finding>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn put(&self, key: String, findings: Vec<Finding>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, findings);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Results cache keyed by the fingerprint of the raw input text.
pub struct ResultCache {
    store: Box<dyn CacheStore>,
}

impl ResultCache {
    pub fn new(store: impl CacheStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn get(&self, key: &str) -> Option<Vec<Finding>> {
        self.store.get(key)
    }

    pub fn put(&self, key: String, findings: Vec<Finding>) {
        self.store.put(key, findings);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
