//! JSON REST handlers for relay commands.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use relaypanel_app::ports::RelayDriver;
use relaypanel_domain::relay::{RelayAction, RelayId};
use relaypanel_domain::wire::{BulkCommandReply, RelayCommandReply};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the single-relay endpoint.
pub enum SwitchOneResponse {
    Ok(Json<RelayCommandReply>),
    Failed(Json<RelayCommandReply>),
}

impl From<RelayCommandReply> for SwitchOneResponse {
    fn from(reply: RelayCommandReply) -> Self {
        if reply.success {
            Self::Ok(Json(reply))
        } else {
            Self::Failed(Json(reply))
        }
    }
}

impl IntoResponse for SwitchOneResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Failed(json) => (StatusCode::INTERNAL_SERVER_ERROR, json).into_response(),
        }
    }
}

/// Possible responses from the all-relays endpoint.
pub enum SwitchAllResponse {
    Ok(Json<BulkCommandReply>),
    Failed(Json<BulkCommandReply>),
}

impl From<BulkCommandReply> for SwitchAllResponse {
    fn from(reply: BulkCommandReply) -> Self {
        if reply.success {
            Self::Ok(Json(reply))
        } else {
            Self::Failed(Json(reply))
        }
    }
}

impl IntoResponse for SwitchAllResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Failed(json) => (StatusCode::INTERNAL_SERVER_ERROR, json).into_response(),
        }
    }
}

/// `POST /api/relay/{relay}/{action}`
pub async fn switch_one<D>(
    State(state): State<AppState<D>>,
    Path((relay, action)): Path<(String, String)>,
) -> Result<SwitchOneResponse, ApiError>
where
    D: RelayDriver + 'static,
{
    let id: RelayId = relay.parse()?;
    let action: RelayAction = action.parse()?;
    let reply = state.relay_service.switch_relay(id, action).await;
    Ok(reply.into())
}

/// `POST /api/relay/all/{action}`
pub async fn switch_all<D>(
    State(state): State<AppState<D>>,
    Path(action): Path<String>,
) -> Result<SwitchAllResponse, ApiError>
where
    D: RelayDriver + 'static,
{
    let action: RelayAction = action.parse()?;
    let reply = state.relay_service.switch_all(action).await;
    Ok(reply.into())
}
