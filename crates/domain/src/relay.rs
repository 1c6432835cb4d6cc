//! Relay: one of the four remotely switchable outputs of the node.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of relays wired to the node.
pub const RELAY_COUNT: usize = 4;

const LAST_RELAY: u8 = 4;

/// Identifier of a relay, always within `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RelayId(u8);

impl RelayId {
    /// Every relay of the bank, in ascending order.
    pub const ALL: [Self; RELAY_COUNT] = [Self(1), Self(2), Self(3), Self(4)];

    /// Validate and wrap a relay number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRelayId`] when `n` is outside `1..=4`.
    pub fn new(n: u8) -> Result<Self, ValidationError> {
        if (1..=LAST_RELAY).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ValidationError::InvalidRelayId(n))
        }
    }

    /// The relay number as shown to the user.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for RelayId {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RelayId> for u8 {
    fn from(id: RelayId) -> Self {
        id.0
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RelayId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Anything unparsable maps onto an out-of-range id.
        let n = s.parse::<u8>().unwrap_or(0);
        Self::new(n)
    }
}

/// Command sent to a relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayAction {
    On,
    Off,
}

impl RelayAction {
    /// Map a desired on/off state to the matching action.
    #[must_use]
    pub fn from_bool(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Upper-case label used in user-facing messages (`ON` / `OFF`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }

    /// Lower-case path segment used by the REST API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for RelayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelayAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ValidationError::InvalidAction(other.to_string())),
        }
    }
}

/// Last confirmed on/off state of every relay.
///
/// Created with every relay off; the controller owns it for the lifetime
/// of the page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelayBoard {
    states: [bool; RELAY_COUNT],
}

impl RelayBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: RelayId) -> bool {
        self.states[id.index()]
    }

    pub fn set(&mut self, id: RelayId, on: bool) {
        self.states[id.index()] = on;
    }

    pub fn set_all(&mut self, on: bool) {
        self.states = [on; RELAY_COUNT];
    }

    /// Iterate over `(id, on)` pairs in relay order.
    pub fn iter(&self) -> impl Iterator<Item = (RelayId, bool)> + '_ {
        RelayId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}
