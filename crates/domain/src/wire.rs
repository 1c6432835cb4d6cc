//! JSON bodies exchanged with the node's REST API.
//!
//! | Endpoint | Body |
//! |----------|------|
//! | `POST /api/relay/{n}/{on,off}` | [`RelayCommandReply`] |
//! | `POST /api/relay/all/{on,off}` | [`BulkCommandReply`] |
//! | `GET /api/health` | [`HealthReply`] |
//! | `GET /api/ping` | [`PingReply`] |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::relay::RelayId;

/// Outcome of a command sent to one relay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelayCommandReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayCommandReply {
    #[must_use]
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }

    /// The reported error, ignoring empty strings.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Outcome of a command sent to every relay at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulkCommandReply {
    #[serde(default)]
    pub success: bool,
    /// Per-relay outcomes keyed by relay number.
    #[serde(default)]
    pub results: BTreeMap<String, RelayCommandReply>,
}

impl BulkCommandReply {
    /// Assemble a reply from per-relay outcomes; succeeds only when all did.
    #[must_use]
    pub fn from_results(results: impl IntoIterator<Item = (RelayId, RelayCommandReply)>) -> Self {
        let results: BTreeMap<String, RelayCommandReply> = results
            .into_iter()
            .map(|(id, reply)| (id.to_string(), reply))
            .collect();
        let success = !results.is_empty() && results.values().all(|reply| reply.success);
        Self { success, results }
    }

    /// Every non-empty per-relay error, in relay order, joined by `", "`.
    ///
    /// Returns `None` when no relay reported an error message.
    #[must_use]
    pub fn error_summary(&self) -> Option<String> {
        let mut entries: Vec<(&String, &RelayCommandReply)> = self.results.iter().collect();
        entries.sort_by_key(|(key, _)| key.parse::<u32>().unwrap_or(u32::MAX));

        let errors: Vec<&str> = entries
            .into_iter()
            .filter_map(|(_, reply)| reply.error_message())
            .collect();
        if errors.is_empty() {
            None
        } else {
            Some(errors.join(", "))
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReply {
    pub status: String,
}

impl Default for HealthReply {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `GET /api/ping`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PingReply {
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub rtt_ms: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}
