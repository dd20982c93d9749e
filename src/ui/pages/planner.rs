//! Season and crop selection plus field parameters.

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{
    AppState, Difficulty, DifficultyFilter, FieldParameters, IrrigationType, SoilType,
};
use crate::infra::export::{export_plan, ExportError};
use crate::ui::components::badges::DifficultyBadge;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::modifier_class;

#[component]
pub fn PlannerPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (seasons, season, description, difficulty, field, selected) = state.with(|st| {
        let seasons: Vec<String> = st
            .reference
            .seasons
            .seasons()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        let description = st
            .reference
            .seasons
            .season(&st.season)
            .map(|s| s.description.clone())
            .unwrap_or_default();
        (
            seasons,
            st.season.clone(),
            description,
            st.difficulty,
            st.field,
            st.selected_crops.clone(),
        )
    });
    let crops = state.with(|st| st.visible_crops());
    let chips: Vec<(String, Option<Difficulty>)> = state.with(|st| {
        st.selected_crops
            .iter()
            .map(|name| {
                let difficulty = st.reference.seasons.find_crop(name).map(|c| c.difficulty);
                (name.clone(), difficulty)
            })
            .collect()
    });

    // Kept as text so partial input like "2." survives re-renders.
    let mut size_input = use_signal(|| field.field_size_acres.to_string());
    let size_invalid = FieldParameters::parse_size(&size_input()).is_none();
    let input_class = if size_invalid { "input input--invalid" } else { "input" };

    let on_export = move |_| {
        let plan = state.with(|st| st.plan_export());
        match export_plan(&plan) {
            Ok(path) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Plan exported to {}", path.display()),
            ),
            Err(ExportError::EmptyPlan) => push_toast(
                toasts,
                ToastKind::Warning,
                "Select at least one crop before exporting.",
            ),
            Err(err) => push_toast(toasts, ToastKind::Error, format!("Export failed: {err}")),
        }
    };

    rsx! {
        div { class: "stack",
            section { class: "panel",
                div { class: "panel__header",
                    div {
                        h2 { class: "section-title", "Season" }
                        p { class: "muted small", "{description}" }
                    }
                    button { class: "btn btn--primary", onclick: on_export, "⬇ Export Plan" }
                }
                div { class: "season-tabs",
                    for name in seasons {
                        button {
                            key: "{name}",
                            class: modifier_class("season-tab", "active", name == season),
                            onclick: {
                                let name = name.clone();
                                move |_| {
                                    state.with_mut(|st| st.select_season(&name));
                                    persist_user_state(&state);
                                }
                            },
                            "{name}"
                        }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    h2 { class: "section-title", "Crops for {season}" }
                    select {
                        class: "input input--inline",
                        value: difficulty.key(),
                        onchange: move |evt| {
                            let filter = DifficultyFilter::from_key(&evt.value());
                            state.with_mut(|st| st.difficulty = filter);
                        },
                        option { value: "all", "All difficulties" }
                        for level in Difficulty::ALL {
                            option { value: DifficultyFilter::Only(level).key(), "{level.label()}" }
                        }
                    }
                }
                if crops.is_empty() {
                    p { class: "muted", "No crops match this filter." }
                } else {
                    ul { class: "crop-grid",
                        for crop in crops {
                            li {
                                key: "{crop.name}",
                                class: modifier_class("crop-card", "selected", selected.contains(&crop.name)),
                                label { class: "crop-card__label",
                                    input {
                                        r#type: "checkbox",
                                        checked: selected.contains(&crop.name),
                                        onchange: {
                                            let name = crop.name.clone();
                                            move |_| {
                                                state.with_mut(|st| st.toggle_crop(&name));
                                                persist_user_state(&state);
                                            }
                                        },
                                    }
                                    span { class: "crop-card__name", "{crop.name}" }
                                }
                                DifficultyBadge { difficulty: crop.difficulty }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "section-title", "Selected crops" }
                if selected.is_empty() {
                    p { class: "muted", "Nothing selected yet. Tick crops above to build a plan." }
                } else {
                    div { class: "chips",
                        for (name, difficulty) in chips {
                            span { key: "{name}", class: "chip",
                                "{name}"
                                if let Some(difficulty) = difficulty {
                                    DifficultyBadge { difficulty }
                                }
                                button {
                                    class: "chip__remove",
                                    title: "Remove {name}",
                                    onclick: {
                                        let name = name.clone();
                                        move |_| {
                                            state.with_mut(|st| st.remove_crop(&name));
                                            persist_user_state(&state);
                                        }
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "section-title", "Field" }
                div { class: "form-grid",
                    div {
                        label { class: "label", "Field size (acres)" }
                        input {
                            class: input_class,
                            r#type: "number",
                            min: "0",
                            step: "0.1",
                            value: size_input(),
                            oninput: move |evt| {
                                let raw = evt.value();
                                if let Some(acres) = FieldParameters::parse_size(&raw) {
                                    state.with_mut(|st| st.field.field_size_acres = acres);
                                    persist_user_state(&state);
                                }
                                size_input.set(raw);
                            },
                        }
                    }
                    div {
                        label { class: "label", "Soil type" }
                        select {
                            class: "input",
                            value: field.soil_type.key(),
                            onchange: move |evt| {
                                let soil = SoilType::parse_lossy(&evt.value());
                                state.with_mut(|st| st.field.soil_type = soil);
                                persist_user_state(&state);
                            },
                            for soil in SoilType::ALL {
                                option { value: soil.key(), "{soil.label()}" }
                            }
                        }
                    }
                    div {
                        label { class: "label", "Irrigation" }
                        select {
                            class: "input",
                            value: field.irrigation_type.key(),
                            onchange: move |evt| {
                                let irrigation = IrrigationType::parse_lossy(&evt.value());
                                state.with_mut(|st| st.field.irrigation_type = irrigation);
                                persist_user_state(&state);
                            },
                            for irrigation in IrrigationType::ALL {
                                option { value: irrigation.key(), "{irrigation.label()}" }
                            }
                        }
                    }
                }
                p { class: "muted small",
                    "Soil adjusts water and fertilizer; irrigation adjusts water only."
                }
            }
        }
    }
}
