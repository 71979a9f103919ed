//! Function-name parsing for the `invoke` and `query` entry points.
//!
//! The host passes the function as a free-form string. It is parsed into a
//! closed enum before dispatch so an unknown name is rejected up front.

use std::fmt;

use crate::error::ChaincodeError;

/// Functions reachable through `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeFunction {
    /// Re-run initialization (acts as a reset of `hello_world`).
    Init,
    /// Store a value under a caller-chosen key.
    Write,
}

/// Functions reachable through `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFunction {
    /// Fetch the value stored under a key.
    Read,
}

impl InvokeFunction {
    pub fn parse(function: &str) -> Result<Self, ChaincodeError> {
        match function {
            "init" => Ok(Self::Init),
            "write" => Ok(Self::Write),
            other => Err(ChaincodeError::UnknownInvoke(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Write => "write",
        }
    }
}

impl QueryFunction {
    pub fn parse(function: &str) -> Result<Self, ChaincodeError> {
        match function {
            "read" => Ok(Self::Read),
            other => Err(ChaincodeError::UnknownQuery(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
        }
    }
}

impl fmt::Display for InvokeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QueryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
