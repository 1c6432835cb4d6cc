//! Relay API port: the node's REST API as seen from the control panel.

use std::future::Future;
use std::rc::Rc;

use relaypanel_domain::error::TransportError;
use relaypanel_domain::relay::{RelayAction, RelayId};
use relaypanel_domain::wire::{BulkCommandReply, PingReply, RelayCommandReply};

/// Client for the node's relay endpoints.
///
/// Implementations only fail with [`TransportError`] when no usable reply
/// was obtained; a reply carrying `success: false` is still `Ok`.
pub trait RelayApi {
    /// `POST /api/relay/{n}/{action}`
    fn switch_relay(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> impl Future<Output = Result<RelayCommandReply, TransportError>>;

    /// `POST /api/relay/all/{action}`
    fn switch_all(
        &self,
        action: RelayAction,
    ) -> impl Future<Output = Result<BulkCommandReply, TransportError>>;

    /// `GET /api/health`, resolving to whether the node answered with a 2xx status.
    fn health(&self) -> impl Future<Output = Result<bool, TransportError>>;

    /// `GET /api/ping`
    fn ping(&self) -> impl Future<Output = Result<PingReply, TransportError>>;
}

impl<T: RelayApi> RelayApi for Rc<T> {
    fn switch_relay(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> impl Future<Output = Result<RelayCommandReply, TransportError>> {
        (**self).switch_relay(id, action)
    }

    fn switch_all(
        &self,
        action: RelayAction,
    ) -> impl Future<Output = Result<BulkCommandReply, TransportError>> {
        (**self).switch_all(action)
    }

    fn health(&self) -> impl Future<Output = Result<bool, TransportError>> {
        (**self).health()
    }

    fn ping(&self) -> impl Future<Output = Result<PingReply, TransportError>> {
        (**self).ping()
    }
}
