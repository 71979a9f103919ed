//! `chaincode-peer`: a local host that runs chaincode against ledger state.
//!
//! The peer owns a chaincode and a committed [`StateStore`]. For every
//! transaction it:
//!
//! - **Isolates:** hands the chaincode a fresh `TxContext` whose writes are
//!   buffered in a `WriteSet`
//! - **Commits atomically:** applies the write set only if the entry point
//!   succeeded; a failure leaves committed state untouched
//! - **Keeps queries read-only:** `query` receives a shared stub and never
//!   commits
//!
//! The primary entry point is [`Peer`]. [`JsonFileStore`] persists state
//! between runs of the `chaincode-peer` binary.
//!
//! [`StateStore`]: chaincode_shim::StateStore

pub mod error;
pub mod config;
pub mod context;
pub mod file_store;
pub mod logging;
pub mod peer;

pub use error::{EntryPoint, PeerError};
pub use config::PeerConfig;
pub use context::TxContext;
pub use file_store::JsonFileStore;
pub use peer::Peer;
