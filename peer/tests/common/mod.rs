//! Shared test helpers for peer integration tests.
//!
//! Provides argument builders, peer factories, and a test chaincode that
//! writes several keys before deciding whether to fail.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chaincode_peer::{Peer, PeerConfig};
use chaincode_shim::{Chaincode, ChaincodeStub, MemStore, ShimError};
use chaincode_start::SimpleChaincode;

// ── Argument Builders ──

/// Turn string literals into the owned argument vector the host passes.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Peer Factories ──

/// A `SimpleChaincode` peer over an empty in-memory store.
pub fn simple_peer() -> Peer<SimpleChaincode> {
    Peer::in_memory(SimpleChaincode::new())
}

/// A `SimpleChaincode` peer over a store seeded with `pairs`.
pub fn seeded_peer(pairs: &[(&str, &str)]) -> Peer<SimpleChaincode> {
    let mut data = BTreeMap::new();
    for (k, v) in pairs {
        data.insert(k.to_string(), v.as_bytes().to_vec());
    }
    Peer::new(
        SimpleChaincode::new(),
        Box::new(MemStore::with_data(data)),
        PeerConfig::default(),
    )
}

// ── Multi-write Chaincode ──

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("batch aborted after {0} writes")]
    Aborted(usize),
    #[error(transparent)]
    State(#[from] ShimError),
}

/// Writes every `key=value` argument, then fails if the function is `"abort"`.
///
/// Used to check that a failed transaction commits none of its writes.
pub struct BatchChaincode;

impl BatchChaincode {
    fn write_all(
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, BatchError> {
        for arg in args {
            let (key, value) = arg.split_once('=').unwrap_or((arg.as_str(), ""));
            stub.put_state(key, value.as_bytes())?;
        }
        if function == "abort" {
            return Err(BatchError::Aborted(args.len()));
        }
        Ok(Vec::new())
    }
}

impl Chaincode for BatchChaincode {
    type Error = BatchError;

    fn init(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, BatchError> {
        Self::write_all(stub, function, args)
    }

    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, BatchError> {
        Self::write_all(stub, function, args)
    }

    fn query(
        &self,
        stub: &dyn ChaincodeStub,
        _function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, BatchError> {
        let mut out = Vec::new();
        for key in args {
            if let Some(value) = stub.get_state(key)? {
                out.extend_from_slice(&value);
            }
        }
        Ok(out)
    }
}

/// A `BatchChaincode` peer over an empty in-memory store.
pub fn batch_peer() -> Peer<BatchChaincode> {
    Peer::in_memory(BatchChaincode)
}
