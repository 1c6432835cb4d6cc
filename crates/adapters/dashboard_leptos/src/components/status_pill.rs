//! Node liveness pill.

use leptos::prelude::*;

use crate::presenter::PanelView;

#[component]
pub fn StatusPill(panel: PanelView) -> impl IntoView {
    view! {
        <span
            id="node-status"
            class=move || format!("status-pill {}", panel.node_status.get().css_class())
        >
            {move || panel.node_status.get().label()}
        </span>
    }
}
