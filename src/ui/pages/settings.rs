use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::AppState,
    infra::export::default_export_dir,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::{
        persistence::preferences_path,
        version::{version_label, APP_NAME, GIT_TAG},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let weather_ready = std::env::var("OPENWEATHER_API_KEY").is_ok_and(|key| !key.trim().is_empty());
    let prefs_location = preferences_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable on this platform".to_string());
    let export_location = default_export_dir().display().to_string();

    let on_reset = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| *st = AppState::new(st.reference.clone()));
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default preferences.");
        }
    };

    rsx! {
        div { class: "stack",
            section { class: "panel",
                h2 { class: "section-title", "Preferences" }
                p { class: "muted small",
                    "Season, crop selection, field parameters and market view are saved automatically."
                }
                dl { class: "details",
                    dt { "Preferences file" }
                    dd { code { "{prefs_location}" } }
                    dt { "Plan exports" }
                    dd { code { "{export_location}" } }
                }
                button { class: "btn btn--warning", onclick: on_reset, "Reset to defaults" }
            }

            section { class: "panel",
                h2 { class: "section-title", "Weather service" }
                if weather_ready {
                    p { class: "badge badge--good", "OPENWEATHER_API_KEY detected" }
                } else {
                    p { class: "badge badge--bad", "OPENWEATHER_API_KEY not set" }
                    p { class: "muted small",
                        "Weather lookups on the Conditions tab need an OpenWeather API key in the environment."
                    }
                }
            }

            section { class: "panel",
                h2 { class: "section-title", "About" }
                dl { class: "details",
                    dt { "Application" }
                    dd { "{APP_NAME}" }
                    dt { "Version" }
                    dd { "{version_label()}" }
                    if let Some(tag) = GIT_TAG {
                        dt { "Build tag" }
                        dd { "{tag}" }
                    }
                }
                p { class: "muted small",
                    "Resource rates and market prices are illustrative reference values. Price history and forecasts are synthetic."
                }
            }
        }
    }
}
