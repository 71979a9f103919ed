//! The host contract: what a chaincode may call, and what the host calls.
//!
//! [`ChaincodeStub`] is the per-invocation handle through which chaincode
//! reaches ledger state. [`Chaincode`] is the three-entry-point interface the
//! host drives. The shape of both is fixed by the host, not by any one
//! chaincode.

use crate::error::ShimError;

/// State access handed to a chaincode for the duration of one call.
///
/// Keys are validated by the implementation (non-empty, bounded length).
/// Values are opaque bytes.
pub trait ChaincodeStub {
    /// Read a value from ledger state.
    ///
    /// Reads observe writes made earlier in the same invocation.
    /// Returns `Ok(None)` if the key does not exist.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ShimError>;

    /// Write a value to ledger state.
    ///
    /// The write becomes durable only if the invocation as a whole succeeds.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), ShimError>;
}

/// A program the host deploys and drives.
///
/// Every entry point receives the function name and its string arguments and
/// returns an opaque payload. `query` only gets a shared stub, so it cannot
/// mutate state.
pub trait Chaincode {
    /// Error type surfaced to the host when an entry point fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once when the chaincode is instantiated.
    fn init(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Called for every state-mutating transaction.
    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Called for read-only requests.
    fn query(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;
}
