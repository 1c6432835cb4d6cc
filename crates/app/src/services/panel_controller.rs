//! Panel controller: relay commands issued from the control panel.

use std::cell::RefCell;

use relaypanel_domain::error::{CommandError, UNKNOWN_ERROR};
use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::{RelayAction, RelayBoard, RelayId};

use crate::ports::{Presenter, RelayApi, Runtime};
use crate::services::notifier::Notifier;
use crate::services::status_poller::StatusPoller;
use crate::task::TaskHandle;

/// Owns the confirmed relay state and turns user intents into API calls.
///
/// After every settle point (success or failure) the rendered state equals
/// the [`RelayBoard`] held here, i.e. the last state the node confirmed.
pub struct PanelController<A, P, R> {
    api: A,
    presenter: P,
    runtime: R,
    notifier: Notifier<P, R>,
    board: RefCell<RelayBoard>,
}

impl<A, P, R> PanelController<A, P, R>
where
    A: RelayApi + Clone + 'static,
    P: Presenter + Clone + 'static,
    R: Runtime + Clone + 'static,
{
    /// Create a controller with every relay off.
    pub fn new(api: A, presenter: P, runtime: R) -> Self {
        let notifier = Notifier::new(presenter.clone(), runtime.clone());
        Self {
            api,
            presenter,
            runtime,
            notifier,
            board: RefCell::new(RelayBoard::new()),
        }
    }

    /// Snapshot of the last confirmed relay state.
    pub fn board(&self) -> RelayBoard {
        *self.board.borrow()
    }

    /// Push the whole confirmed state to the presenter.
    pub fn render(&self) {
        let board = self.board();
        for (id, on) in board.iter() {
            self.presenter.render_relay(id, on);
        }
    }

    /// Render the initial state, check the node's health and start polling
    /// its liveness.
    ///
    /// Polling runs until the returned handle is cancelled or dropped.
    pub async fn start(&self) -> TaskHandle {
        self.render();
        self.check_health().await;
        StatusPoller::new(
            self.api.clone(),
            self.presenter.clone(),
            self.runtime.clone(),
        )
        .start()
    }

    /// One-off health check performed when the panel loads.
    pub async fn check_health(&self) {
        match self.api.health().await {
            Ok(true) => tracing::info!("Server is ready"),
            Ok(false) => {
                tracing::warn!("health check returned a non-success status");
                self.notifier
                    .notify(Notification::error("Server connection issue"));
            }
            Err(err) => {
                tracing::warn!(error = %err, "health check failed");
                self.notifier.notify(Notification::error(
                    "Cannot connect to server. Make sure the relay node is running.",
                ));
            }
        }
    }

    /// Switch one relay to `on`.
    ///
    /// The switch is moved optimistically and disabled while the request is in
    /// flight. On success the new state is committed; on failure the switch is
    /// moved back to the state confirmed at the time the failure arrives. Either way a notification is
    /// shown.
    ///
    /// # Errors
    ///
    /// Returns the [`CommandError`] that was already reported to the user.
    pub async fn toggle_relay(&self, id: RelayId, on: bool) -> Result<(), CommandError> {
        let action = RelayAction::from_bool(on);

        self.presenter.render_relay(id, on);
        self.presenter.set_relay_busy(id, true);

        let outcome = match self.api.switch_relay(id, action).await {
            Ok(reply) if reply.success => Ok(()),
            Ok(reply) => Err(CommandError::application(reply.error)),
            Err(err) => Err(CommandError::from(err)),
        };

        match &outcome {
            Ok(()) => {
                self.board.borrow_mut().set(id, on);
                self.presenter.render_relay(id, on);
                tracing::debug!(relay = %id, %action, "relay switched");
                self.notifier.notify(Notification::success(format!(
                    "Relay {id} turned {}",
                    action.label()
                )));
            }
            Err(err) => {
                // Re-read: a bulk command may have settled meanwhile.
                let confirmed = self.board.borrow().get(id);
                self.presenter.render_relay(id, confirmed);
                tracing::warn!(relay = %id, %action, error = %err, "relay command failed");
                let message = match err {
                    CommandError::Application { .. } => {
                        format!("Failed to control Relay {id}: {err}")
                    }
                    CommandError::Transport(_) => format!("Error controlling Relay {id}: {err}"),
                };
                self.notifier.notify(Notification::error(message));
            }
        }

        self.presenter.set_relay_busy(id, false);
        outcome
    }

    /// Switch every relay to `action` with a single request.
    ///
    /// All controls are disabled for the duration of the call. Nothing is
    /// applied optimistically: the relays only change when the node reports
    /// success for the whole bank.
    ///
    /// # Errors
    ///
    /// Returns the [`CommandError`] that was already reported to the user;
    /// application errors carry the per-relay errors joined by `", "`.
    pub async fn set_all(&self, action: RelayAction) -> Result<(), CommandError> {
        let label = action.label();
        self.presenter.set_controls_enabled(false);
        self.presenter
            .render_master(&format!("Turning all relays {label}..."), true);

        let outcome = match self.api.switch_all(action).await {
            Ok(reply) if reply.success => Ok(()),
            Ok(reply) => Err(CommandError::application(Some(
                reply
                    .error_summary()
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ))),
            Err(err) => Err(CommandError::from(err)),
        };

        match &outcome {
            Ok(()) => {
                self.board.borrow_mut().set_all(action.is_on());
                self.render();
                let message = format!("All relays turned {label}");
                self.presenter.render_master(&message, false);
                tracing::debug!(%action, "all relays switched");
                self.notifier.notify(Notification::success(message));
            }
            Err(err @ CommandError::Application { .. }) => {
                tracing::warn!(%action, error = %err, "bulk relay command failed");
                self.presenter.render_master(&format!("Failed: {err}"), false);
                self.notifier.notify(Notification::error(format!(
                    "Failed to control all relays: {err}"
                )));
            }
            Err(err @ CommandError::Transport(_)) => {
                tracing::warn!(%action, error = %err, "bulk relay request failed");
                self.presenter.render_master(&format!("Error: {err}"), false);
                self.notifier
                    .notify(Notification::error(format!("Error controlling relays: {err}")));
            }
        }

        self.presenter.set_controls_enabled(true);
        outcome
    }
}
