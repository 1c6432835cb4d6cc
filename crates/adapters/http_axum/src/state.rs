//! Shared application state for axum handlers.

use std::sync::Arc;

use relaypanel_app::ports::RelayDriver;
use relaypanel_app::services::relay_service::RelayService;

/// Application state shared across all axum handlers.
///
/// Generic over the relay driver to avoid dynamic dispatch. `Clone` is
/// implemented manually so the driver itself does not need to be `Clone`.
pub struct AppState<D> {
    /// Relay command and ping service.
    pub relay_service: Arc<RelayService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
        }
    }
}

impl<D> AppState<D>
where
    D: RelayDriver + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(relay_service: RelayService<D>) -> Self {
        Self {
            relay_service: Arc::new(relay_service),
        }
    }
}
