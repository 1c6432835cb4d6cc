//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod notifier;
pub mod panel_controller;
pub mod relay_service;
pub mod status_poller;
