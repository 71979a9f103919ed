//! `chaincode-shim`: the contract between chaincode and the host that runs it.
//!
//! This crate defines both sides of the boundary:
//!
//! - `Chaincode` trait: the `init` / `invoke` / `query` entry points a host drives
//! - `ChaincodeStub` trait: `get_state` / `put_state` handed to chaincode per call
//! - `StateStore` trait: committed ledger state behind a host
//! - `WriteSet`: per-transaction write buffer committed atomically
//! - `MemStore`: in-memory `StateStore`
//! - `MockStub`: in-memory `ChaincodeStub` for chaincode unit tests
//! - `StubConfig`: key/value/write limits
//! - `ShimError`: stub/store error type with stable `ErrorCode`s

pub mod error;
pub mod types;
pub mod write_set;
pub mod state_store;
pub mod mem_store;
pub mod mock_stub;
pub mod traits;

// Re-export commonly used types at the crate root.
pub use error::{ErrorCode, ShimError};
pub use types::StubConfig;
pub use write_set::WriteSet;
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use mock_stub::MockStub;
pub use traits::{Chaincode, ChaincodeStub};
