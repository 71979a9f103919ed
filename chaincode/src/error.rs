//! Chaincode error type.

use chaincode_shim::ShimError;

/// Failure of a chaincode entry point.
///
/// Every variant is terminal for the invocation that produced it.
#[derive(Debug, thiserror::Error)]
pub enum ChaincodeError {
    /// The function was called with the wrong number of arguments.
    #[error("incorrect number of arguments: expecting {expected} ({usage}), got {got}")]
    ArgumentCount {
        expected: usize,
        got: usize,
        usage: &'static str,
    },

    /// `invoke` was called with a function it does not handle.
    #[error("received unknown function invocation: {0}")]
    UnknownInvoke(String),

    /// `query` was called with a function it does not handle.
    #[error("received unknown function query: {0}")]
    UnknownQuery(String),

    /// Reading a key failed, either because the store errored or the key
    /// is absent.
    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    ReadFailed { key: String },

    /// Writing to state failed.
    #[error(transparent)]
    State(#[from] ShimError),
}

impl ChaincodeError {
    /// Build an argument-count error unless `args.len() == expected`.
    pub(crate) fn check_args(
        args: &[String],
        expected: usize,
        usage: &'static str,
    ) -> Result<(), Self> {
        if args.len() == expected {
            return Ok(());
        }
        Err(Self::ArgumentCount {
            expected,
            got: args.len(),
            usage,
        })
    }
}
