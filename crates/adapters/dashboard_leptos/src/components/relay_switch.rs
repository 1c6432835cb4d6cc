//! Switch card for a single relay.

use leptos::prelude::*;
use relaypanel_domain::relay::{RelayAction, RelayId};

use crate::presenter::PanelView;

/// A card with the relay's switch and its ON/OFF status.
///
/// The switch is disabled and the status marked as loading while a command
/// for this relay is in flight.
#[component]
pub fn RelaySwitch(
    /// Relay driven by this card.
    id: RelayId,
    /// Reactive panel state.
    panel: PanelView,
    /// Called with the requested position when the switch is flipped.
    #[prop(into)]
    on_toggle: Callback<(RelayId, bool)>,
) -> impl IntoView {
    let is_on = move || panel.relays.get().get(id);
    let is_busy = move || panel.busy.get().get(id);
    let status_class = move || {
        let state = if is_on() { "on" } else { "off" };
        if is_busy() {
            format!("status {state} loading")
        } else {
            format!("status {state}")
        }
    };

    view! {
        <div class="relay-card">
            <h3>{format!("Relay {id}")}</h3>
            <label class="switch">
                <input
                    type="checkbox"
                    id=format!("relay{id}")
                    prop:checked=is_on
                    disabled=is_busy
                    on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                />
                <span class="slider"></span>
            </label>
            <span id=format!("status{id}") class=status_class>
                {move || RelayAction::from_bool(is_on()).label()}
            </span>
        </div>
    }
}
