//! # relaypanel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the node's **JSON relay API** consumed by the control panel
//!   (`/api/relay/{n}/{action}`, `/api/relay/all/{action}`, `/api/health`,
//!   `/api/ping`)
//! - Serve the dashboard bundle (HTML, CSS, wasm) from a static directory
//! - Map HTTP requests into [`RelayService`](relaypanel_app::services::relay_service::RelayService)
//!   calls (driving adapter) and map outcomes back into status codes
//!
//! ## Dependency rule
//! Depends on `relaypanel-app` (for port traits and services) and
//! `relaypanel-domain` (for wire types). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
