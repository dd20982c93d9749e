//! Planting readiness: seed and soil grades, live weather and the growth roadmap.

use dioxus::prelude::*;

use crate::domain::{stage_for_day, AppState, QualityGrade, GROWTH_STAGES};
use crate::infra::weather::{Coordinates, WeatherClient, WeatherError, WeatherInfo};
use crate::ui::components::badges::GradeBadge;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::modifier_class;

#[component]
pub fn ConditionsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut weather = use_signal(|| None::<WeatherInfo>);
    let mut loading = use_signal(|| false);
    let mut day_input = use_signal(|| "1".to_string());

    let (conditions, cycle_started) = state.with(|st| (st.conditions.clone(), st.cycle_started));
    let optimal = conditions.is_optimal();
    let blockers = conditions.blockers();
    let weather_label = conditions.weather.clone().unwrap_or_else(|| "Unknown".to_string());
    let current_day = day_input().trim().parse::<u32>().ok();
    let current_stage = current_day.and_then(stage_for_day);

    let on_lookup = move |_| {
        if loading() {
            return;
        }
        let coords = match Coordinates::parse(&latitude(), &longitude()) {
            Ok(coords) => coords,
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, err.to_string());
                return;
            }
        };

        loading.set(true);
        spawn(async move {
            match lookup(coords).await {
                Ok(info) => {
                    let main = info.main.clone();
                    state.with_mut(|st| st.conditions.weather = Some(main));
                    weather.set(Some(info));
                }
                Err(WeatherError::MissingApiKey) => {
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Set OPENWEATHER_API_KEY to enable weather lookups.",
                    );
                }
                Err(_) => {
                    push_toast(toasts, ToastKind::Error, "Failed to fetch weather data.");
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "stack",
            section { class: "panel",
                div { class: "panel__header",
                    h2 { class: "section-title", "Planting conditions" }
                    if optimal {
                        span { class: "badge badge--good", "✅ Optimal for planting" }
                    } else {
                        span { class: "badge badge--bad", "⚠️ Not optimal" }
                    }
                }
                div { class: "form-grid",
                    div {
                        label { class: "label", "Seed quality" }
                        GradeSelect {
                            value: conditions.seed,
                            onchange: move |grade| state.with_mut(|st| st.conditions.seed = grade),
                        }
                    }
                    div {
                        label { class: "label", "Soil quality" }
                        GradeSelect {
                            value: conditions.soil,
                            onchange: move |grade| state.with_mut(|st| st.conditions.soil = grade),
                        }
                    }
                    div {
                        label { class: "label", "Weather" }
                        p { class: "value", "{weather_label}" }
                    }
                }
                div { class: "grade-row",
                    span { class: "muted small", "Seed " }
                    GradeBadge { grade: conditions.seed }
                    span { class: "muted small", " Soil " }
                    GradeBadge { grade: conditions.soil }
                }
                if !blockers.is_empty() {
                    ul { class: "blockers",
                        for reason in blockers {
                            li { key: "{reason}", "{reason}" }
                        }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    div {
                        h2 { class: "section-title", "Crop cycle" }
                        if cycle_started {
                            p { class: "value", "✅ Crop cycle started. Monitor your crops regularly." }
                        } else if optimal {
                            p { class: "muted small", "Conditions are optimal to start the crop cycle." }
                        } else {
                            p { class: "muted small", "Waiting for optimal conditions…" }
                        }
                    }
                    button {
                        class: "btn btn--primary",
                        disabled: cycle_started || !optimal,
                        title: cycle_hint(optimal, cycle_started),
                        onclick: move |_| {
                            if state.with_mut(|st| st.start_cycle()) {
                                push_toast(toasts, ToastKind::Success, "Crop cycle started.");
                            }
                        },
                        if cycle_started { "Cycle started" } else { "Start crop cycle" }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "section-title", "Weather lookup" }
                div { class: "form-grid",
                    div {
                        label { class: "label", "Latitude" }
                        input {
                            class: "input",
                            placeholder: "e.g. 40.71",
                            value: latitude(),
                            oninput: move |evt| latitude.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "label", "Longitude" }
                        input {
                            class: "input",
                            placeholder: "e.g. -74.01",
                            value: longitude(),
                            oninput: move |evt| longitude.set(evt.value()),
                        }
                    }
                    div { class: "form-grid__action",
                        button {
                            class: "btn btn--primary",
                            disabled: loading(),
                            onclick: on_lookup,
                            if loading() { "Checking…" } else { "Check weather" }
                        }
                    }
                }
                if let Some(info) = weather() {
                    WeatherCard { info }
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    h2 { class: "section-title", "Growth roadmap" }
                    div {
                        label { class: "label", "Day of cycle" }
                        input {
                            class: "input input--inline",
                            r#type: "number",
                            min: "0",
                            value: day_input(),
                            oninput: move |evt| day_input.set(evt.value()),
                        }
                    }
                }
                ol { class: "roadmap",
                    for stage in GROWTH_STAGES.iter() {
                        li {
                            key: "{stage.name}",
                            class: modifier_class("roadmap__stage", "current", current_stage == Some(stage)),
                            span { class: "roadmap__name", "{stage.name}" }
                            span { class: "muted small", "{stage.day_range()}" }
                        }
                    }
                }
                if current_day == Some(0) {
                    p { class: "muted small", "Not sown yet." }
                }
            }
        }
    }
}

fn cycle_hint(optimal: bool, started: bool) -> &'static str {
    match (optimal, started) {
        (_, true) => "The crop cycle has already started",
        (true, false) => "Start the crop cycle",
        (false, false) => "Needs seed and soil graded above Poor and weather that is not windy",
    }
}

async fn lookup(coords: Coordinates) -> Result<WeatherInfo, WeatherError> {
    WeatherClient::from_env()?.current(coords).await
}

#[component]
fn GradeSelect(value: Option<QualityGrade>, onchange: EventHandler<Option<QualityGrade>>) -> Element {
    let selected = value.map(|grade| grade.label()).unwrap_or("");

    rsx! {
        select {
            class: "input",
            value: selected,
            onchange: move |evt| onchange.call(QualityGrade::parse(&evt.value())),
            option { value: "", "Not assessed" }
            for grade in QualityGrade::ALL {
                option { value: grade.label(), "{grade.label()}" }
            }
        }
    }
}

#[component]
fn WeatherCard(info: WeatherInfo) -> Element {
    let observed = info.observed_label();

    rsx! {
        div { class: "weather-card",
            p { class: "weather-card__main", "{info.main}" }
            p { class: "muted", "{info.description}" }
            dl { class: "weather-card__stats",
                dt { "Temperature" }
                dd { "{info.temperature_c:.1} °C" }
                dt { "Humidity" }
                dd { "{info.humidity_pct:.0}%" }
                dt { "Wind" }
                dd { "{info.wind_speed_ms:.1} m/s" }
            }
            if let Some(at) = observed {
                p { class: "muted small", "Observed {at}" }
            }
        }
    }
}
