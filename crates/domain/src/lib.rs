//! # relaypanel-domain
//!
//! Pure domain model for the relaypanel relay control system.
//!
//! ## Responsibilities
//! - Foundational types: validated relay identifiers, error conventions
//! - Define **Relays** (the fixed bank of four on/off outputs) and the
//!   [`RelayBoard`](relay::RelayBoard) that tracks their confirmed state
//! - Define the **Node** liveness status shown in the status pill
//! - Define **Notifications** (transient, severity-tagged messages)
//! - Define the **wire types** exchanged with the node's REST API
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod node;
pub mod notification;
pub mod relay;
pub mod wire;
