//! Committed state storage abstraction.
//!
//! A `StateStore` holds the ledger state as of the last committed
//! transaction. Hosts layer a [`WriteSet`] over it while a chaincode runs:
//! reads check the write set first, then fall through to the store.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory `BTreeMap`
//! - `JsonFileStore` (`chaincode-peer`): JSON document on disk

use crate::error::ShimError;
use crate::write_set::WriteSet;

/// Abstraction over committed ledger state.
pub trait StateStore: Send + Sync {
    /// Get the committed value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError>;

    /// Check if a key exists in committed state.
    fn contains(&self, key: &str) -> Result<bool, ShimError> {
        Ok(self.get(key)?.is_some())
    }

    /// Commit a transaction's writes.
    ///
    /// Either every write in the set becomes visible or none does.
    fn apply(&mut self, writes: WriteSet) -> Result<(), ShimError>;
}
