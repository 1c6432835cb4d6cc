//! Virtual relay bank configuration.

use serde::Deserialize;

/// Behaviour of the simulated node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Relay numbers whose commands always fail.
    pub failing: Vec<u8>,
    /// Whether the simulated node answers pings.
    pub online: bool,
    /// Round-trip time reported by successful pings, in milliseconds.
    pub rtt_ms: Option<f64>,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            failing: Vec::new(),
            online: true,
            rtt_ms: Some(1.0),
        }
    }
}
