//! Presenter port: everything the panel shows to the user.

use std::rc::Rc;

use relaypanel_domain::node::NodeStatus;
use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::RelayId;

/// View of the control panel.
///
/// The use-cases never look up UI elements themselves; they only push state
/// through this trait.
pub trait Presenter {
    /// Show relay `id` as on or off (switch position and status text).
    fn render_relay(&self, id: RelayId, on: bool);

    /// Disable the relay's switch and mark its status as loading while a
    /// command is in flight.
    fn set_relay_busy(&self, id: RelayId, busy: bool);

    /// Update the master status line of the bulk controls.
    fn render_master(&self, text: &str, busy: bool);

    /// Enable or disable every button of the panel.
    fn set_controls_enabled(&self, enabled: bool);

    /// Update the node status pill.
    fn render_node_status(&self, status: NodeStatus);

    /// Display a notification, replacing whatever is currently shown.
    fn show_notification(&self, notification: &Notification);

    /// Hide the current notification.
    fn hide_notification(&self);
}

impl<T: Presenter> Presenter for Rc<T> {
    fn render_relay(&self, id: RelayId, on: bool) {
        (**self).render_relay(id, on);
    }

    fn set_relay_busy(&self, id: RelayId, busy: bool) {
        (**self).set_relay_busy(id, busy);
    }

    fn render_master(&self, text: &str, busy: bool) {
        (**self).render_master(text, busy);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        (**self).set_controls_enabled(enabled);
    }

    fn render_node_status(&self, status: NodeStatus) {
        (**self).render_node_status(status);
    }

    fn show_notification(&self, notification: &Notification) {
        (**self).show_notification(notification);
    }

    fn hide_notification(&self) {
        (**self).hide_notification();
    }
}
