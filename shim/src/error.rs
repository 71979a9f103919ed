//! Shim-side error types.
//!
//! `ShimError` is returned by every `ChaincodeStub` and `StateStore` method.
//! Contract-defined failures carry an [`ErrorCode`]; backend failures
//! carry a message or the underlying I/O error.

use std::fmt;

/// Contract-defined state access failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyKey,
    KeyTooLarge,
    ValueTooLarge,
    WriteLimit,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "ERR_EMPTY_KEY"),
            Self::KeyTooLarge => write!(f, "ERR_KEY_TOO_LARGE"),
            Self::ValueTooLarge => write!(f, "ERR_VALUE_TOO_LARGE"),
            Self::WriteLimit => write!(f, "ERR_WRITE_LIMIT"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}

/// Error returned by stub and state store operations.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    /// A contract-defined failure.
    #[error("state error: {0}")]
    Code(ErrorCode),

    /// A backend failure not covered by a contract code.
    /// Reported to callers as `ERR_INTERNAL`.
    #[error("internal state error: {0}")]
    Internal(String),

    /// The storage backend failed to read or write.
    #[error("state backend I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShimError {
    /// The contract code for this failure. Backend failures map to
    /// [`ErrorCode::Internal`].
    pub fn to_error_code(&self) -> ErrorCode {
        match self {
            Self::Code(code) => *code,
            Self::Internal(_) | Self::Io(_) => ErrorCode::Internal,
        }
    }

    pub fn empty_key() -> Self {
        Self::Code(ErrorCode::EmptyKey)
    }

    pub fn key_too_large() -> Self {
        Self::Code(ErrorCode::KeyTooLarge)
    }

    pub fn value_too_large() -> Self {
        Self::Code(ErrorCode::ValueTooLarge)
    }

    pub fn write_limit() -> Self {
        Self::Code(ErrorCode::WriteLimit)
    }
}

impl From<ErrorCode> for ShimError {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}
