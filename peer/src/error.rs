//! Peer error types.

use std::fmt;

use chaincode_shim::ShimError;

/// Which chaincode entry point a transaction ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Init,
    Invoke,
    Query,
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Invoke => write!(f, "invoke"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// Top-level error type for the peer crate.
#[derive(Debug, thiserror::Error)]
pub enum PeerError {
    /// The chaincode rejected the call. No state was committed.
    #[error("chaincode {entry} failed")]
    Chaincode {
        entry: EntryPoint,
        #[source]
        source: anyhow::Error,
    },

    /// Committing to or opening the state store failed.
    #[error("state store error: {0}")]
    Store(#[from] ShimError),
}

impl PeerError {
    pub(crate) fn chaincode<E>(entry: EntryPoint, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Chaincode {
            entry,
            source: anyhow::Error::new(err),
        }
    }

    /// Borrow the chaincode's own error, if this is a chaincode failure of
    /// type `E`.
    pub fn chaincode_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::Chaincode { source, .. } => source.downcast_ref::<E>(),
            Self::Store(_) => None,
        }
    }
}
