//! Relay service: node-side handling of relay commands and liveness pings.

use relaypanel_domain::relay::{RelayAction, RelayId};
use relaypanel_domain::wire::{BulkCommandReply, PingReply, RelayCommandReply};

use crate::ports::RelayDriver;

/// Application service behind the node's REST API.
pub struct RelayService<D> {
    driver: D,
}

impl<D: RelayDriver> RelayService<D> {
    /// Create a new service backed by the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Drive a single relay, reporting the outcome instead of failing.
    pub async fn switch_relay(&self, id: RelayId, action: RelayAction) -> RelayCommandReply {
        match self.driver.switch(id, action).await {
            Ok(output) => {
                tracing::info!(relay = %id, %action, "relay switched");
                RelayCommandReply::ok(output)
            }
            Err(err) => {
                tracing::warn!(relay = %id, %action, error = %err, "relay command failed");
                RelayCommandReply::failed(err.to_string())
            }
        }
    }

    /// Drive every relay concurrently and wait for all of them.
    ///
    /// The reply succeeds only when every relay did.
    pub async fn switch_all(&self, action: RelayAction) -> BulkCommandReply {
        let [r1, r2, r3, r4] = RelayId::ALL;
        let (o1, o2, o3, o4) = tokio::join!(
            self.switch_relay(r1, action),
            self.switch_relay(r2, action),
            self.switch_relay(r3, action),
            self.switch_relay(r4, action),
        );
        BulkCommandReply::from_results([(r1, o1), (r2, o2), (r3, o3), (r4, o4)])
    }

    /// Check whether the node link is up.
    pub async fn ping(&self) -> PingReply {
        match self.driver.ping().await {
            Ok(rtt_ms) => PingReply {
                online: true,
                rtt_ms,
                error: None,
            },
            Err(err) => {
                tracing::debug!(error = %err, "node ping failed");
                PingReply {
                    online: false,
                    rtt_ms: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
