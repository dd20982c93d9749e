//! Water, fertilizer and cost estimates for the current selection.

use dioxus::prelude::*;

use crate::domain::{
    filter_and_sort, summarize_resources, AppState, ResourceColumn, ResourceLine, ResourceSort,
    SortDirection,
};
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::format;

#[component]
pub fn ResourcesPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let mut query = use_signal(String::new);
    let mut sort = use_signal(ResourceSort::default);

    let (summary, field) = state.with(|st| {
        (
            summarize_resources(&st.reference.resources, &st.selected_crops, &st.field),
            st.field,
        )
    });
    let totals = summary.totals;
    let rows = filter_and_sort(&summary.lines, &query(), sort());
    let field_note = format!(
        "{} acres · {} soil · {} irrigation",
        field.field_size_acres,
        field.soil_type.label(),
        field.irrigation_type.label()
    );

    if summary.lines.is_empty() {
        return rsx! {
            section { class: "panel empty-state",
                h2 { class: "section-title", "Resource Calculator" }
                p { class: "muted", "Select crops on the Planner tab to estimate water, fertilizer and cost." }
            }
        };
    }

    rsx! {
        div { class: "stack",
            div { class: "kpi-grid",
                KpiCard {
                    title: "Water".to_string(),
                    value: format::liters(totals.water_liters),
                    icon: "💧",
                    description: Some(field_note.clone()),
                }
                KpiCard {
                    title: "Fertilizer".to_string(),
                    value: format::kilograms(totals.fertilizer_kg),
                    icon: "🧪",
                    description: None,
                }
                KpiCard {
                    title: "Cost".to_string(),
                    value: format::dollars(totals.cost),
                    icon: "💰",
                    description: Some(format!("{} crops", summary.lines.len())),
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    div {
                        h2 { class: "section-title", "Per crop" }
                        p { class: "muted small", "{totals}" }
                    }
                    input {
                        class: "input input--inline",
                        placeholder: "Filter crops…",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                table { class: "table",
                    thead {
                        tr {
                            for column in ResourceColumn::ALL {
                                th {
                                    key: "{column.label()}",
                                    button {
                                        class: "table__sort",
                                        onclick: move |_| sort.set(sort().toggle(column)),
                                        "{column.label()}{sort_marker(sort(), column)}"
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { class: "muted", colspan: "4", "No crops match \"{query}\"." }
                            }
                        }
                        for line in rows.iter().cloned() {
                            ResourceRow { key: "{line.crop}", line }
                        }
                    }
                    tfoot {
                        tr { class: "table__total",
                            td { "Total" }
                            td { "{format::liters(totals.water_liters)}" }
                            td { "{format::kilograms(totals.fertilizer_kg)}" }
                            td { "{format::dollars(totals.cost)}" }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "section-title", "Water share" }
                ul { class: "bars",
                    for line in summary.lines.iter().cloned() {
                        li { key: "{line.crop}", class: "bars__row",
                            span { class: "bars__label", "{line.crop}" }
                            div { class: "bars__track",
                                div {
                                    class: "bars__fill",
                                    style: "width: {format::share_pct(line.water_liters, totals.water_liters)}%",
                                }
                            }
                            span { class: "bars__value muted small", "{format::liters(line.water_liters)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResourceRow(line: ResourceLine) -> Element {
    rsx! {
        tr {
            td { "{line.crop}" }
            td { "{format::liters(line.water_liters)}" }
            td { "{format::kilograms(line.fertilizer_kg)}" }
            td { "{format::dollars(line.cost)}" }
        }
    }
}

fn sort_marker(sort: ResourceSort, column: ResourceColumn) -> &'static str {
    if sort.column != column {
        return "";
    }
    match sort.direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}
