//! `SimpleChaincode`: stores and reads single string values.
//!
//! ## Functions
//!
//! | Entry point | Function | Args | Effect |
//! |---|---|---|---|
//! | `init` | any | `[value]` | `hello_world = value` |
//! | `invoke` | `init` | `[value]` | same as `init` |
//! | `invoke` | `write` | `[key, value]` | `key = value` |
//! | `query` | `read` | `[key]` | returns the value of `key` |
//!
//! Each call performs exactly one state access, or none if its arguments
//! are rejected.

use chaincode_shim::{Chaincode, ChaincodeStub};
use tracing::{debug, info, warn};

use crate::error::ChaincodeError;
use crate::function::{InvokeFunction, QueryFunction};

/// Key written by `init`.
pub const HELLO_WORLD_KEY: &str = "hello_world";

/// The hello-world chaincode. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleChaincode;

impl SimpleChaincode {
    pub fn new() -> Self {
        Self
    }

    /// Store the single argument under [`HELLO_WORLD_KEY`].
    pub fn init_state(
        &self,
        stub: &mut dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        ChaincodeError::check_args(args, 1, "initial value")?;
        stub.put_state(HELLO_WORLD_KEY, args[0].as_bytes())?;
        Ok(Vec::new())
    }

    /// Store `args[1]` under `args[0]`.
    pub fn write(
        &self,
        stub: &mut dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        debug!("running write()");
        ChaincodeError::check_args(args, 2, "name of the variable and value to set")?;
        let (name, value) = (&args[0], &args[1]);
        stub.put_state(name, value.as_bytes())?;
        Ok(Vec::new())
    }

    /// Return the raw bytes stored under `args[0]`.
    ///
    /// A missing key is a failure, reported in the same format as a
    /// store error.
    pub fn read(
        &self,
        stub: &dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        ChaincodeError::check_args(args, 1, "name of the var to query")?;
        let name = &args[0];
        match stub.get_state(name) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                debug!(key = %name, "no state for key");
                Err(ChaincodeError::ReadFailed { key: name.clone() })
            }
            Err(err) => {
                warn!(key = %name, error = %err, "get_state failed");
                Err(ChaincodeError::ReadFailed { key: name.clone() })
            }
        }
    }
}

impl Chaincode for SimpleChaincode {
    type Error = ChaincodeError;

    fn init(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        info!(function, "init is running");
        self.init_state(stub, args)
    }

    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        info!(function, "invoke is running");
        let parsed = InvokeFunction::parse(function).inspect_err(|_| {
            warn!(function, "invoke did not find func");
        })?;
        match parsed {
            InvokeFunction::Init => self.init_state(stub, args),
            InvokeFunction::Write => self.write(stub, args),
        }
    }

    fn query(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        info!(function, "query is running");
        let parsed = QueryFunction::parse(function).inspect_err(|_| {
            warn!(function, "query did not find func");
        })?;
        match parsed {
            QueryFunction::Read => self.read(stub, args),
        }
    }
}
