//! Bulk controls driving every relay at once.

use leptos::prelude::*;
use relaypanel_domain::relay::RelayAction;

use crate::presenter::PanelView;

#[component]
pub fn MasterControls(
    /// Reactive panel state.
    panel: PanelView,
    /// Called with the requested action when a bulk button is pressed.
    #[prop(into)]
    on_set_all: Callback<RelayAction>,
) -> impl IntoView {
    let disabled = move || !panel.controls_enabled.get();

    view! {
        <section class="master-controls">
            <button
                class="btn btn-on"
                disabled=disabled
                on:click=move |_| on_set_all.run(RelayAction::On)
            >
                "All ON"
            </button>
            <button
                class="btn btn-off"
                disabled=disabled
                on:click=move |_| on_set_all.run(RelayAction::Off)
            >
                "All OFF"
            </button>
            <p
                id="master-status"
                class=move || {
                    if panel.master.get().busy { "master-status loading" } else { "master-status" }
                }
            >
                {move || panel.master.get().text}
            </p>
        </section>
    }
}
