//! Stub configuration and limit checks.
//!
//! `StubConfig` bundles the key/value size limits applied to every
//! `put_state` call and the per-transaction write budget.

use crate::error::ShimError;

/// Default maximum key length in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Default maximum value length in bytes.
pub const MAX_VALUE_LEN: usize = 64 * 1024;

/// Default maximum bytes (keys + values) written by one transaction.
pub const MAX_WRITE_BYTES: u64 = 1024 * 1024;

/// Limits enforced by a stub on behalf of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes written by a single transaction.
    pub max_write_bytes: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: MAX_WRITE_BYTES,
        }
    }
}

impl StubConfig {
    /// Check a key before it is read.
    pub fn validate_key(&self, key: &str) -> Result<(), ShimError> {
        if key.is_empty() {
            return Err(ShimError::empty_key());
        }
        if key.len() > self.max_key_len {
            return Err(ShimError::key_too_large());
        }
        Ok(())
    }

    /// Check a key-value pair before it is written.
    pub fn validate_put(&self, key: &str, value: &[u8]) -> Result<(), ShimError> {
        self.validate_key(key)?;
        if value.len() > self.max_value_len {
            return Err(ShimError::value_too_large());
        }
        Ok(())
    }
}
