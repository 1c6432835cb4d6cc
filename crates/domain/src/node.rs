//! Node status: liveness of the device exposing the relay API.

use serde::{Deserialize, Serialize};

/// Whether the node answered its last liveness ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Online,
    #[default]
    Offline,
}

impl NodeStatus {
    #[must_use]
    pub fn from_online(online: bool) -> Self {
        if online { Self::Online } else { Self::Offline }
    }

    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Text shown inside the status pill.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    /// Style class applied to the status pill.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
