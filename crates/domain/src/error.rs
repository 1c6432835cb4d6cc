//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Fallback text used when the node reports a failure without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A value failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Relay numbers are limited to the fixed bank `1..=4`.
    #[error("Relay number must be between 1 and 4")]
    InvalidRelayId(u8),

    /// Only `on` and `off` are accepted as relay actions.
    #[error("Action must be 'on' or 'off'")]
    InvalidAction(String),
}

/// The request never produced a usable response (network failure,
/// undecodable body, aborted fetch, …).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure of a relay command as seen by the control panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The node answered but reported `success: false`.
    #[error("{}", message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Application { message: Option<String> },

    /// The request itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl CommandError {
    /// Build an application error, discarding empty messages.
    #[must_use]
    pub fn application(message: Option<String>) -> Self {
        Self::Application {
            message: message.filter(|msg| !msg.is_empty()),
        }
    }
}

/// Failure reported by a relay driver on the node side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// The relay did not acknowledge the command.
    #[error("{0}")]
    Command(String),

    /// The driver gave up waiting for the relay.
    #[error("Command timed out")]
    Timeout,

    /// The node did not answer a liveness ping in time.
    #[error("Ping timed out")]
    PingTimeout,
}
