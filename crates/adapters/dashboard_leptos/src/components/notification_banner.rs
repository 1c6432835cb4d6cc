//! Transient notification banner.

use leptos::prelude::*;

use crate::presenter::PanelView;

/// Renders the last notification; the `show` class is dropped when it is
/// hidden so the banner can fade out with its text still in place.
#[component]
pub fn NotificationBanner(panel: PanelView) -> impl IntoView {
    let class = move || {
        let severity = panel
            .notification
            .get()
            .map_or("info", |notification| notification.severity.css_class());
        if panel.notification_visible.get() {
            format!("notification {severity} show")
        } else {
            format!("notification {severity}")
        }
    };

    view! {
        <div id="notification" class=class>
            {move || panel.notification.get().map(|notification| notification.message)}
        </div>
    }
}
