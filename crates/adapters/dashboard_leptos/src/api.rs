//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use relaypanel_app::ports::RelayApi;
use relaypanel_domain::error::TransportError;
use relaypanel_domain::relay::{RelayAction, RelayId};
use relaypanel_domain::wire::{BulkCommandReply, PingReply, RelayCommandReply};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api";

/// [`RelayApi`] backed by `fetch` against the node serving the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRelayApi;

fn transport(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

/// Decode the JSON body whatever the status code.
///
/// The node reports failed commands as `success: false` bodies on 4xx/5xx
/// responses, so only an unreadable body counts as a transport error.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, TransportError> {
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(_) if !resp.ok() => Err(TransportError::new(format!("HTTP {}", resp.status()))),
        Err(err) => Err(transport(err)),
    }
}

async fn post(url: &str) -> Result<Response, TransportError> {
    Request::post(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(transport)
}

async fn get(url: &str) -> Result<Response, TransportError> {
    Request::get(url).send().await.map_err(transport)
}

impl RelayApi for HttpRelayApi {
    async fn switch_relay(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> Result<RelayCommandReply, TransportError> {
        let resp = post(&format!("{API_BASE}/relay/{id}/{action}")).await?;
        decode(resp).await
    }

    async fn switch_all(&self, action: RelayAction) -> Result<BulkCommandReply, TransportError> {
        let resp = post(&format!("{API_BASE}/relay/all/{action}")).await?;
        decode(resp).await
    }

    async fn health(&self) -> Result<bool, TransportError> {
        let resp = get(&format!("{API_BASE}/health")).await?;
        Ok(resp.ok())
    }

    async fn ping(&self) -> Result<PingReply, TransportError> {
        let resp = get(&format!("{API_BASE}/ping")).await?;
        decode(resp).await
    }
}
