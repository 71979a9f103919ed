//! Peer runtime: drives a chaincode against committed state.
//!
//! Each call follows the same lifecycle:
//!
//! 1. Open a fresh [`TxContext`] over the committed store
//! 2. Run the chaincode entry point against it
//! 3. On success, commit the context's write set (`init` / `invoke` only)
//! 4. On failure, drop the write set so no partial state is committed
//!
//! Queries get a shared `TxContext`, so they cannot write.

use std::sync::atomic::{AtomicU64, Ordering};

use chaincode_shim::{Chaincode, MemStore, StateStore};
use tracing::{info, info_span, warn};

use crate::config::PeerConfig;
use crate::context::TxContext;
use crate::error::{EntryPoint, PeerError};

/// A local host for one chaincode.
pub struct Peer<C: Chaincode> {
    chaincode: C,
    store: Box<dyn StateStore>,
    config: PeerConfig,
    tx_seq: AtomicU64,
}

impl<C: Chaincode> Peer<C> {
    pub fn new(chaincode: C, store: Box<dyn StateStore>, config: PeerConfig) -> Self {
        Self {
            chaincode,
            store,
            config,
            tx_seq: AtomicU64::new(0),
        }
    }

    /// Create a peer over an empty in-memory store with default config.
    pub fn in_memory(chaincode: C) -> Self {
        Self::new(chaincode, Box::new(MemStore::new()), PeerConfig::default())
    }

    /// Run the chaincode's `init` entry point and commit its writes.
    pub fn init(&mut self, function: &str, args: &[String]) -> Result<Vec<u8>, PeerError> {
        self.execute(EntryPoint::Init, function, args)
    }

    /// Run the chaincode's `invoke` entry point and commit its writes.
    pub fn invoke(&mut self, function: &str, args: &[String]) -> Result<Vec<u8>, PeerError> {
        self.execute(EntryPoint::Invoke, function, args)
    }

    /// Run the chaincode's `query` entry point. Never commits.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, PeerError> {
        let tx_seq = self.next_tx_seq();
        let span = info_span!(
            "tx",
            channel = %self.config.channel,
            tx_seq,
            entry = %EntryPoint::Query,
            function
        );
        let _guard = span.enter();

        let ctx = TxContext::new(self.store.as_ref(), &self.config.stub);
        self.chaincode
            .query(&ctx, function, args)
            .map_err(|err| {
                warn!(error = %err, "query failed");
                PeerError::chaincode(EntryPoint::Query, err)
            })
    }

    /// Committed state.
    pub fn store(&self) -> &dyn StateStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &PeerConfig {
        &self.config
    }

    pub fn chaincode(&self) -> &C {
        &self.chaincode
    }

    /// Number of transactions (including queries) started so far.
    pub fn tx_count(&self) -> u64 {
        self.tx_seq.load(Ordering::Relaxed)
    }

    fn next_tx_seq(&self) -> u64 {
        self.tx_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Run `init` or `invoke` and commit on success.
    fn execute(
        &mut self,
        entry: EntryPoint,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, PeerError> {
        let tx_seq = self.next_tx_seq();
        let span = info_span!(
            "tx",
            channel = %self.config.channel,
            tx_seq,
            entry = %entry,
            function
        );
        let _guard = span.enter();

        let mut ctx = TxContext::new(self.store.as_ref(), &self.config.stub);
        let result = if entry == EntryPoint::Init {
            self.chaincode.init(&mut ctx, function, args)
        } else {
            self.chaincode.invoke(&mut ctx, function, args)
        };

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    error = %err,
                    discarded_writes = ctx.writes().len(),
                    "transaction failed, discarding writes"
                );
                return Err(PeerError::chaincode(entry, err));
            }
        };

        let writes = ctx.into_write_set();
        let write_count = writes.len();
        self.store.apply(writes)?;
        info!(writes = write_count, payload_len = payload.len(), "transaction committed");
        Ok(payload)
    }
}
