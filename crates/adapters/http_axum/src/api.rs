//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod node;
#[allow(clippy::missing_errors_doc)]
pub mod relays;

use axum::Router;
use axum::routing::{get, post};

use relaypanel_app::ports::RelayDriver;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: RelayDriver + 'static,
{
    Router::new()
        // Relays
        .route("/relay/all/{action}", post(relays::switch_all::<D>))
        .route("/relay/{relay}/{action}", post(relays::switch_one::<D>))
        // Node
        .route("/health", get(node::health))
        .route("/ping", get(node::ping::<D>))
}
