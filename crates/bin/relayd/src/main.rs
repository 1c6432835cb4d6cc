//! # relayd: relay node daemon
//!
//! Composition root that wires the relay driver into the HTTP API and serves
//! the control panel.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the relay driver (adapter) and the relay service
//! - Build the axum router, injecting the service and the dashboard directory
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use relaypanel_adapter_http_axum::state::AppState;
use relaypanel_adapter_virtual::VirtualRelayBank;
use relaypanel_app::services::relay_service::RelayService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Driver
    let driver = VirtualRelayBank::new(&config.relays);

    // HTTP
    let state = AppState::new(RelayService::new(driver));
    let static_dir = config
        .server
        .static_dir
        .as_deref()
        .filter(|dir| dir.is_dir());
    if static_dir.is_none() {
        tracing::warn!("dashboard directory not found, serving the API only");
    }
    let app = relaypanel_adapter_http_axum::router::build(state, static_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "relayd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("relayd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
