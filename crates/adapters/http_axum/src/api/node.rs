//! JSON REST handlers for node health and liveness.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use relaypanel_app::ports::RelayDriver;
use relaypanel_domain::wire::{HealthReply, PingReply};

use crate::state::AppState;

/// Possible responses from the ping endpoint.
pub enum PingResponse {
    Online(Json<PingReply>),
    Offline(Json<PingReply>),
}

impl IntoResponse for PingResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Online(json) => json.into_response(),
            Self::Offline(json) => (StatusCode::SERVICE_UNAVAILABLE, json).into_response(),
        }
    }
}

/// `GET /api/health`
pub async fn health() -> Json<HealthReply> {
    Json(HealthReply::default())
}

/// `GET /api/ping`
pub async fn ping<D>(State(state): State<AppState<D>>) -> PingResponse
where
    D: RelayDriver + 'static,
{
    let reply = state.relay_service.ping().await;
    if reply.online {
        PingResponse::Online(Json(reply))
    } else {
        PingResponse::Offline(Json(reply))
    }
}
