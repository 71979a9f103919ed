//! JSON file-backed state store.
//!
//! The whole ledger is kept in memory and rewritten on every commit.
//! Values are base64-encoded so arbitrary bytes survive the round trip.
//!
//! ```text
//! { "version": 1, "state": { "hello_world": "aGk=" } }
//! ```
//!
//! Commits write a sibling `.tmp` file, sync it to disk, and rename it over
//! the previous one, so a crash mid-write leaves the previous state intact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chaincode_shim::{ShimError, StateStore, WriteSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current on-disk format version.
pub const STATE_FILE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    version: u32,
    state: BTreeMap<String, String>,
}

/// `StateStore` persisted as a single JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: BTreeMap<String, Vec<u8>>,
}

impl JsonFileStore {
    /// Open a state file, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ShimError> {
        let path = path.into();
        let data = match fs::read(&path) {
            Ok(bytes) => decode_state(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), keys = data.len(), "opened state file");
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn persist(&self, data: &BTreeMap<String, Vec<u8>>) -> Result<(), ShimError> {
        let bytes = encode_state(data)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let result = write_synced(&tmp, &bytes).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(err) = result {
            // Best effort; the write error is what the caller needs.
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError> {
        Ok(self.data.get(key).cloned())
    }

    fn contains(&self, key: &str) -> Result<bool, ShimError> {
        Ok(self.data.contains_key(key))
    }

    /// Persist first, then swap in the new map, so a failed write leaves
    /// both disk and memory at the previous state.
    fn apply(&mut self, writes: WriteSet) -> Result<(), ShimError> {
        if writes.is_empty() {
            return Ok(());
        }
        let mut next = self.data.clone();
        next.extend(writes);
        self.persist(&next)?;
        debug!(path = %self.path.display(), keys = next.len(), "state file written");
        self.data = next;
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn decode_state(bytes: &[u8]) -> Result<BTreeMap<String, Vec<u8>>, ShimError> {
    let file: StateFile = serde_json::from_slice(bytes)
        .map_err(|e| ShimError::Internal(format!("corrupt state file: {}", e)))?;
    if file.version != STATE_FILE_VERSION {
        return Err(ShimError::Internal(format!(
            "unsupported state file version {}, expected {}",
            file.version, STATE_FILE_VERSION
        )));
    }
    file.state
        .into_iter()
        .map(|(key, encoded)| {
            let value = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
                ShimError::Internal(format!("corrupt value for key {}: {}", key, e))
            })?;
            Ok((key, value))
        })
        .collect()
}

fn encode_state(data: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>, ShimError> {
    let file = StateFile {
        version: STATE_FILE_VERSION,
        state: data
            .iter()
            .map(|(k, v)| (k.clone(), STANDARD.encode(v)))
            .collect(),
    };
    serde_json::to_vec_pretty(&file)
        .map_err(|e| ShimError::Internal(format!("failed to encode state: {}", e)))
}
