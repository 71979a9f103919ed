//! Per-transaction write buffer.
//!
//! Writes made by a chaincode invocation are buffered here and become
//! visible to later reads in the same invocation. The host commits the
//! whole set on success and drops it on failure.

use std::collections::BTreeMap;

/// Buffered `key -> value` writes of one transaction.
///
/// `BTreeMap` keeps commit order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSet {
    writes: BTreeMap<String, Vec<u8>>,
    /// Keys + values currently buffered, for `max_write_bytes`.
    total_write_bytes: u64,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a write, replacing any earlier write to the same key.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        let new_bytes = (key.len() + value.len()) as u64;
        if let Some(prev) = self.writes.get(&key) {
            let prev_bytes = (key.len() + prev.len()) as u64;
            self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
        }
        self.total_write_bytes = self.total_write_bytes.saturating_add(new_bytes);
        self.writes.insert(key, value);
    }

    /// Look up a buffered write. `None` means the caller must consult
    /// committed state.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Bytes the buffer would hold after writing `key = value`.
    pub fn projected_bytes(&self, key: &str, value: &[u8]) -> u64 {
        let prev = self
            .writes
            .get(key)
            .map(|v| (key.len() + v.len()) as u64)
            .unwrap_or(0);
        self.total_write_bytes
            .saturating_sub(prev)
            .saturating_add((key.len() + value.len()) as u64)
    }

    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Iterate buffered writes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.writes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl IntoIterator for WriteSet {
    type Item = (String, Vec<u8>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}
