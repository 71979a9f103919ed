//! Per-transaction stub handed to chaincode.
//!
//! `TxContext` layers a [`WriteSet`] over the committed [`StateStore`] for
//! the duration of one chaincode call. It is created fresh for each
//! transaction and either committed or dropped when the call returns.

use chaincode_shim::{ChaincodeStub, ShimError, StateStore, StubConfig, WriteSet};
use tracing::debug;

/// The peer's `ChaincodeStub` implementation.
pub struct TxContext<'a> {
    /// Committed state (read-only while the transaction runs).
    store: &'a dyn StateStore,
    /// Limits applied to reads and writes.
    config: &'a StubConfig,
    /// Writes buffered by this transaction.
    writes: WriteSet,
}

impl<'a> TxContext<'a> {
    pub fn new(store: &'a dyn StateStore, config: &'a StubConfig) -> Self {
        Self {
            store,
            config,
            writes: WriteSet::new(),
        }
    }

    /// Writes buffered so far.
    pub fn writes(&self) -> &WriteSet {
        &self.writes
    }

    /// Consume the context, yielding its writes for commit.
    pub fn into_write_set(self) -> WriteSet {
        self.writes
    }
}

impl ChaincodeStub for TxContext<'_> {
    /// Check the write set first, then committed state.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError> {
        self.config.validate_key(key)?;
        if let Some(value) = self.writes.get(key) {
            debug!(key, "get_state hit write set");
            return Ok(Some(value.to_vec()));
        }
        debug!(key, "get_state from committed state");
        self.store.get(key)
    }

    /// Buffer a write. Limits are checked before anything is buffered.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), ShimError> {
        self.config.validate_put(key, value)?;
        if self.writes.projected_bytes(key, value) > self.config.max_write_bytes {
            return Err(ShimError::write_limit());
        }
        debug!(key, value_len = value.len(), "put_state");
        self.writes.put(key.to_string(), value.to_vec());
        Ok(())
    }
}
