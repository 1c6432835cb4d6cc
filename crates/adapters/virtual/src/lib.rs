//! # relaypanel-adapter-virtual
//!
//! Virtual relay bank that stands in for the node's relays during demos and
//! tests.
//!
//! | Behaviour | Source |
//! |-----------|--------|
//! | Four relays, all off at start | built in |
//! | Relays that refuse every command | [`VirtualConfig::failing`] |
//! | Node link up or down | [`VirtualConfig::online`] |
//!
//! ## Dependency rule
//!
//! Depends on `relaypanel-app` (port traits) and `relaypanel-domain` only.

mod config;

pub use config::VirtualConfig;

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use relaypanel_app::ports::RelayDriver;
use relaypanel_domain::error::DriverError;
use relaypanel_domain::relay::{RelayAction, RelayBoard, RelayId};

/// Simulated relay bank implementing [`RelayDriver`].
pub struct VirtualRelayBank {
    board: Mutex<RelayBoard>,
    failing: HashSet<RelayId>,
    online: bool,
    rtt_ms: Option<f64>,
}

impl Default for VirtualRelayBank {
    fn default() -> Self {
        Self::new(&VirtualConfig::default())
    }
}

impl VirtualRelayBank {
    /// Build a bank from configuration; out-of-range relay numbers in
    /// `failing` are ignored.
    #[must_use]
    pub fn new(config: &VirtualConfig) -> Self {
        let failing = config
            .failing
            .iter()
            .filter_map(|&n| match RelayId::new(n) {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!(relay = n, error = %err, "ignoring failing relay");
                    None
                }
            })
            .collect();
        Self {
            board: Mutex::new(RelayBoard::new()),
            failing,
            online: config.online,
            rtt_ms: config.rtt_ms,
        }
    }

    /// Current state of every relay.
    #[must_use]
    pub fn snapshot(&self) -> RelayBoard {
        *self.lock_board()
    }

    fn lock_board(&self) -> MutexGuard<'_, RelayBoard> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RelayDriver for VirtualRelayBank {
    fn switch(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> impl Future<Output = Result<String, DriverError>> + Send {
        let result = if self.failing.contains(&id) {
            Err(DriverError::Command(format!("relay {id} did not respond")))
        } else {
            self.lock_board().set(id, action.is_on());
            Ok(format!("relay{id}{action}"))
        };
        async { result }
    }

    fn ping(&self) -> impl Future<Output = Result<Option<f64>, DriverError>> + Send {
        let result = if self.online {
            Ok(self.rtt_ms)
        } else {
            Err(DriverError::PingTimeout)
        };
        async { result }
    }
}
