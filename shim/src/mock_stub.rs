//! In-memory stub for unit-testing chaincode without a host.
//!
//! Writes go straight into the stub's map (there is no transaction to roll
//! back). Call counters let tests assert that a failed entry point never
//! touched state.

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::error::ShimError;
use crate::traits::ChaincodeStub;
use crate::types::StubConfig;

/// In-memory `ChaincodeStub` implementation.
#[derive(Debug, Default)]
pub struct MockStub {
    state: BTreeMap<String, Vec<u8>>,
    config: StubConfig,
    put_calls: usize,
    get_calls: Cell<usize>,
    fail_next_put: Option<ShimError>,
    fail_gets_with: Option<String>,
}

impl MockStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub with custom limits.
    pub fn with_config(config: StubConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Seed state without counting it as a `put_state` call.
    pub fn set_state(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.state.insert(key.into(), value.into());
    }

    /// Make the next `put_state` fail with `err`.
    pub fn fail_next_put(&mut self, err: ShimError) {
        self.fail_next_put = Some(err);
    }

    /// Make every `get_state` fail with an internal error carrying `msg`.
    pub fn fail_gets(&mut self, msg: impl Into<String>) {
        self.fail_gets_with = Some(msg.into());
    }

    /// Number of `put_state` calls, successful or not.
    pub fn put_calls(&self) -> usize {
        self.put_calls
    }

    /// Number of `get_state` calls, successful or not.
    pub fn get_calls(&self) -> usize {
        self.get_calls.get()
    }

    /// Borrow the stub's state for assertions.
    pub fn state(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.state
    }
}

impl ChaincodeStub for MockStub {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError> {
        self.get_calls.set(self.get_calls.get() + 1);
        if let Some(msg) = &self.fail_gets_with {
            return Err(ShimError::Internal(msg.clone()));
        }
        self.config.validate_key(key)?;
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), ShimError> {
        self.put_calls += 1;
        if let Some(err) = self.fail_next_put.take() {
            return Err(err);
        }
        self.config.validate_put(key, value)?;
        self.state.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
