//! `chaincode-start`: a hello-world chaincode over a single key-value store.
//!
//! [`SimpleChaincode`] implements the host's three entry points:
//!
//! - `init`: store one value under `hello_world`
//! - `invoke`: `init` (reset) or `write` a key/value pair
//! - `query`: `read` the value under a key
//!
//! Every operation validates its argument count and then makes exactly one
//! `put_state` or `get_state` call on the stub it was handed. Storage,
//! ordering, and atomicity belong to the host.

pub mod error;
pub mod function;
pub mod simple;

pub use error::ChaincodeError;
pub use function::{InvokeFunction, QueryFunction};
pub use simple::{SimpleChaincode, HELLO_WORLD_KEY};
