//! Tracing subscriber setup for the peer binary.
//!
//! Libraries in this workspace only emit `tracing` events; installing a
//! subscriber is the binary's job.

use std::error::Error;
use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber writing to stderr.
///
/// Respects `RUST_LOG`; falls back to [`DEFAULT_FILTER`]. With `json` set,
/// events are emitted as one JSON object per line. Fails if a global
/// subscriber is already installed.
pub fn init_logging(json: bool) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    }
}
