//! Peer configuration.

use chaincode_shim::StubConfig;

/// Configuration for a local peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerConfig {
    /// Limits applied to every stub the peer hands out.
    pub stub: StubConfig,

    /// Channel name recorded on every transaction span.
    pub channel: String,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            stub: StubConfig::default(),
            channel: "local".to_string(),
        }
    }
}
