//! Signal-backed [`Presenter`]: every use-case output lands in a reactive
//! signal that the components read.

use leptos::prelude::*;
use relaypanel_app::ports::Presenter;
use relaypanel_domain::node::NodeStatus;
use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::{RelayBoard, RelayId};

/// Text and loading flag of the bulk controls' status line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterStatus {
    pub text: String,
    pub busy: bool,
}

/// Reactive state of the whole panel.
///
/// Only holds signal handles, so it is `Copy` and can be moved into every
/// view closure.
#[derive(Debug, Clone, Copy)]
pub struct PanelView {
    /// Switch positions as rendered (may be ahead of the confirmed state
    /// while a command is in flight).
    pub relays: RwSignal<RelayBoard>,
    /// Relays with a command in flight.
    pub busy: RwSignal<RelayBoard>,
    pub master: RwSignal<MasterStatus>,
    pub controls_enabled: RwSignal<bool>,
    pub node_status: RwSignal<NodeStatus>,
    /// Last notification shown; kept after hiding so it can fade out.
    pub notification: RwSignal<Option<Notification>>,
    pub notification_visible: RwSignal<bool>,
}

impl PanelView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            relays: RwSignal::new(RelayBoard::new()),
            busy: RwSignal::new(RelayBoard::new()),
            master: RwSignal::new(MasterStatus::default()),
            controls_enabled: RwSignal::new(true),
            node_status: RwSignal::new(NodeStatus::Offline),
            notification: RwSignal::new(None),
            notification_visible: RwSignal::new(false),
        }
    }
}

impl Default for PanelView {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for PanelView {
    fn render_relay(&self, id: RelayId, on: bool) {
        self.relays.update(|board| board.set(id, on));
    }

    fn set_relay_busy(&self, id: RelayId, busy: bool) {
        self.busy.update(|board| board.set(id, busy));
    }

    fn render_master(&self, text: &str, busy: bool) {
        self.master.set(MasterStatus {
            text: text.to_string(),
            busy,
        });
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.set(enabled);
    }

    fn render_node_status(&self, status: NodeStatus) {
        self.node_status.set(status);
    }

    fn show_notification(&self, notification: &Notification) {
        self.notification.set(Some(notification.clone()));
        self.notification_visible.set(true);
    }

    fn hide_notification(&self) {
        self.notification_visible.set(false);
    }
}
