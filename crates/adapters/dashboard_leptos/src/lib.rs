use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use relaypanel_app::services::panel_controller::PanelController;
use relaypanel_app::task::TaskHandle;
use relaypanel_domain::relay::{RelayAction, RelayId};

pub mod api;
mod components;
pub mod presenter;
pub mod runtime;

use api::HttpRelayApi;
use components::{MasterControls, NotificationBanner, RelaySwitch, StatusPill};
use presenter::PanelView;
use runtime::BrowserRuntime;

type Controller = PanelController<HttpRelayApi, PanelView, BrowserRuntime>;

/// Root application component.
///
/// Renders the four relay cards, the bulk controls, the node status pill and
/// the notification banner, then runs the startup health check and keeps the
/// status poller alive for as long as the panel is mounted.
#[component]
pub fn App() -> impl IntoView {
    let panel = PanelView::new();
    let controller = StoredValue::new_local(Rc::new(Controller::new(
        HttpRelayApi,
        panel,
        BrowserRuntime,
    )));
    // Dropping the handle stops the poller.
    let poller = StoredValue::new(None::<TaskHandle>);

    spawn_local(async move {
        let handle = controller.get_value().start().await;
        leptos::logging::log!("relay panel started");
        poller.set_value(Some(handle));
    });

    let on_toggle = Callback::new(move |(id, on): (RelayId, bool)| {
        let controller = controller.get_value();
        spawn_local(async move {
            if let Err(err) = controller.toggle_relay(id, on).await {
                leptos::logging::warn!("relay {id} command failed: {err}");
            }
        });
    });

    let on_set_all = Callback::new(move |action: RelayAction| {
        let controller = controller.get_value();
        spawn_local(async move {
            if let Err(err) = controller.set_all(action).await {
                leptos::logging::warn!("bulk {action} command failed: {err}");
            }
        });
    });

    view! {
        <header>
            <h1>"Relay Control Panel"</h1>
            <StatusPill panel=panel/>
        </header>
        <main>
            <section class="relay-grid">
                {RelayId::ALL
                    .into_iter()
                    .map(|id| view! { <RelaySwitch id=id panel=panel on_toggle=on_toggle/> })
                    .collect_view()}
            </section>
            <MasterControls panel=panel on_set_all=on_set_all/>
        </main>
        <NotificationBanner panel=panel/>
    }
}
