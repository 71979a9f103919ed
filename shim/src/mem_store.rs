//! In-memory state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering. The peer uses it when no state file is configured; tests
//! use it everywhere.

use std::collections::BTreeMap;

use crate::error::ShimError;
use crate::state_store::StateStore;
use crate::write_set::WriteSet;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Create a store pre-populated with data.
    pub fn with_data(data: BTreeMap<String, Vec<u8>>) -> Self {
        Self { data }
    }

    /// Insert a key-value pair directly, bypassing any write set.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the full committed map.
    pub fn data(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.data
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError> {
        Ok(self.data.get(key).cloned())
    }

    fn contains(&self, key: &str) -> Result<bool, ShimError> {
        Ok(self.data.contains_key(key))
    }

    fn apply(&mut self, writes: WriteSet) -> Result<(), ShimError> {
        self.data.extend(writes);
        Ok(())
    }
}
