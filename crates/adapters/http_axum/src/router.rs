//! Axum router assembly.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use relaypanel_app::ports::RelayDriver;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the relay API under `/api` and, when `static_dir` is given, serves
/// the dashboard bundle from it for every other path. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<D>(state: AppState<D>, static_dir: Option<&Path>) -> Router
where
    D: RelayDriver + 'static,
{
    let router = Router::new().nest("/api", crate::api::routes());
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use relaypanel_app::services::relay_service::RelayService;
    use relaypanel_domain::error::DriverError;
    use relaypanel_domain::relay::{RelayAction, RelayId};
    use tower::ServiceExt;

    use super::*;

    #[derive(Default)]
    struct StubDriver {
        failing: Vec<u8>,
        offline: bool,
    }

    impl RelayDriver for StubDriver {
        fn switch(
            &self,
            id: RelayId,
            action: RelayAction,
        ) -> impl Future<Output = Result<String, DriverError>> + Send {
            let result = if self.failing.contains(&id.get()) {
                Err(DriverError::Timeout)
            } else {
                Ok(format!("relay{id}{action}"))
            };
            async { result }
        }

        fn ping(&self) -> impl Future<Output = Result<Option<f64>, DriverError>> + Send {
            let result = if self.offline {
                Err(DriverError::PingTimeout)
            } else {
                Ok(Some(0.8))
            };
            async { result }
        }
    }

    fn app(driver: StubDriver) -> Router {
        build(AppState::new(RelayService::new(driver)), None)
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(app(StubDriver::default()), "GET", "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn should_switch_single_relay() {
        let (status, body) =
            send(app(StubDriver::default()), "POST", "/api/relay/2/on").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn should_return_server_error_when_relay_fails() {
        let driver = StubDriver {
            failing: vec![1],
            ..StubDriver::default()
        };
        let (status, body) = send(app(driver), "POST", "/api/relay/1/off").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Command timed out");
    }

    #[tokio::test]
    async fn should_reject_relay_number_outside_bank() {
        let (status, body) =
            send(app(StubDriver::default()), "POST", "/api/relay/5/on").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": "Relay number must be between 1 and 4"
            })
        );
    }

    #[tokio::test]
    async fn should_reject_unknown_action() {
        let (status, body) =
            send(app(StubDriver::default()), "POST", "/api/relay/1/toggle").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Action must be 'on' or 'off'");
    }

    #[tokio::test]
    async fn should_reject_unknown_bulk_action() {
        let (status, body) =
            send(app(StubDriver::default()), "POST", "/api/relay/all/blink").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn should_switch_all_relays() {
        let (status, body) =
            send(app(StubDriver::default()), "POST", "/api/relay/all/on").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        for n in ["1", "2", "3", "4"] {
            assert_eq!(body["results"][n]["success"], true);
        }
    }

    #[tokio::test]
    async fn should_report_per_relay_errors_when_bulk_fails() {
        let driver = StubDriver {
            failing: vec![3],
            ..StubDriver::default()
        };
        let (status, body) = send(app(driver), "POST", "/api/relay/all/off").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["results"]["3"]["error"], "Command timed out");
        assert_eq!(body["results"]["1"]["success"], true);
    }

    #[tokio::test]
    async fn should_report_online_node() {
        let (status, body) = send(app(StubDriver::default()), "GET", "/api/ping").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["online"], true);
        assert_eq!(body["rtt_ms"], 0.8);
    }

    #[tokio::test]
    async fn should_report_offline_node_as_unavailable() {
        let driver = StubDriver {
            offline: true,
            ..StubDriver::default()
        };
        let (status, body) = send(app(driver), "GET", "/api/ping").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["online"], false);
        assert_eq!(body["error"], "Ping timed out");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route_without_static_dir() {
        let (status, _) = send(app(StubDriver::default()), "GET", "/api/unknown").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
