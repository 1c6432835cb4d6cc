//! Relay driver port: how the node reaches its relays.

use std::future::Future;
use std::sync::Arc;

use relaypanel_domain::error::DriverError;
use relaypanel_domain::relay::{RelayAction, RelayId};

/// Access to the relay bank and the node link, used by the node-side
/// [`RelayService`](crate::services::relay_service::RelayService).
pub trait RelayDriver: Send + Sync {
    /// Drive one relay. Resolves to the driver's textual output on success.
    fn switch(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> impl Future<Output = Result<String, DriverError>> + Send;

    /// Check that the node is reachable. Resolves to the round-trip time in
    /// milliseconds when the driver can measure it.
    fn ping(&self) -> impl Future<Output = Result<Option<f64>, DriverError>> + Send;
}

impl<T: RelayDriver> RelayDriver for Arc<T> {
    fn switch(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> impl Future<Output = Result<String, DriverError>> + Send {
        (**self).switch(id, action)
    }

    fn ping(&self) -> impl Future<Output = Result<Option<f64>, DriverError>> + Send {
        (**self).ping()
    }
}
