//! # relaypanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `RelayApi`: the node's REST API as seen from the panel
//!   - `Presenter`: the panel's view (relay switches, master status, pill, toast)
//!   - `Runtime`: timers and task spawning of the hosting event loop
//!   - `RelayDriver`: the node's access to the physical (or simulated) relays
//! - Define **use-cases**:
//!   - `PanelController`: single and bulk relay commands, startup health check
//!   - `Notifier`: transient notifications with replace-on-overlap
//!   - `StatusPoller`: periodic node liveness check
//!   - `RelayService`: node-side command fan-out and ping
//!
//! ## Dependency rule
//! Depends on `relaypanel-domain` only (plus `tokio::sync` for cancellation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;
