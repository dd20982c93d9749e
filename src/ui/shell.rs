use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::modifier_class;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let (season, selected) = state.with(|st| (st.season.clone(), st.selected_crops.len()));
    let subtitle = match selected {
        0 => format!("{season} · no crops selected"),
        1 => format!("{season} · 1 crop selected"),
        n => format!("{season} · {n} crops selected"),
    };

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header__inner",
                    div {
                        h1 { class: "app-title", "🌱 {APP_NAME}" }
                        p { class: "muted small", "{subtitle}" }
                    }
                    nav { class: "nav",
                        NavButton { active: matches!(current_route, Route::Planner {}), onclick: move |_| { nav.push(Route::Planner {}); }, label: "Planner" }
                        NavButton { active: matches!(current_route, Route::Resources {}), onclick: move |_| { nav.push(Route::Resources {}); }, label: "Resources" }
                        NavButton { active: matches!(current_route, Route::Market {}), onclick: move |_| { nav.push(Route::Market {}); }, label: "Market" }
                        NavButton { active: matches!(current_route, Route::Conditions {}), onclick: move |_| { nav.push(Route::Conditions {}); }, label: "Conditions" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer muted small", "{APP_NAME} {version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: modifier_class("nav-btn", "active", active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
