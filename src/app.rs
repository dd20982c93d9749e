use dioxus::{prelude::*, signals::Signal};
use dioxus_logger::tracing::warn;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ConditionsPage, MarketPage, PlannerPage, ResourcesPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Planner {},
    #[route("/resources")]
    Resources {},
    #[route("/market")]
    Market {},
    #[route("/conditions")]
    Conditions {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Saves the selection; failures are logged and otherwise ignored.
pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!("[persist] Failed to persist user state: {err}");
    }
}

#[component]
pub fn Planner() -> Element {
    rsx! { Shell { PlannerPage {} } }
}

#[component]
pub fn Resources() -> Element {
    rsx! { Shell { ResourcesPage {} } }
}

#[component]
pub fn Market() -> Element {
    rsx! { Shell { MarketPage {} } }
}

#[component]
pub fn Conditions() -> Element {
    rsx! { Shell { ConditionsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
