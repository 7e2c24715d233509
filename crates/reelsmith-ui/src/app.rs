//! Main application component.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reelsmith_core::FormController;

use crate::components::{GenerateForm, LoadingIndicator, StatusBanner, VideoResult};
use crate::config::{load_config, now_millis};
use crate::http::FetchClient;
use crate::view::SignalView;

/// Controller type used by the page.
pub type PageController = FormController<SignalView, FetchClient>;

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    let config = load_config();
    let handles = SignalView::new(config.submit_label.clone());
    let loading_label = config.loading_label.clone();
    let controller: StoredValue<Rc<PageController>, LocalStorage> =
        StoredValue::new_local(Rc::new(FormController::new(
            handles,
            FetchClient,
            config,
            now_millis,
        )));

    let on_submit = Callback::new(move |topic: String| {
        let controller = controller.get_value();
        spawn_local(async move {
            let state = controller.submit(&topic).await;
            leptos::logging::log!("=== SUBMIT FINISHED: {} ===", state);
        });
    });

    view! {
        <main class="app">
            <header class="app-header">
                <h1 class="logo-text">"Reelsmith"</h1>
                <p class="app-tagline">"Turn a topic into a short narrated video."</p>
            </header>
            <GenerateForm handles=handles on_submit=on_submit />
            <LoadingIndicator
                visible=handles.loading_visible
                label=loading_label
            />
            <StatusBanner status=handles.status />
            <VideoResult handles=handles />
        </main>
    }
}
