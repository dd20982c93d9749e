//! Market snapshot and synthetic price history for one crop.

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{
    price_changes, project_prices, AppState, MarketSnapshot, PricePoint, SeededRandom, TimeRange,
};
use crate::ui::components::badges::{ChangeBadge, SentimentBadge, TrendBadge};
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::{format, modifier_class};

#[component]
pub fn MarketPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    // Reseeded only on demand so the chart does not jitter on every render.
    let mut seed = use_signal(rand::random::<u64>);

    let (selected, active, time_range, show_forecast) = state.with(|st| {
        (
            st.selected_crops.clone(),
            st.active_market_crop().map(str::to_string),
            st.time_range,
            st.show_forecast,
        )
    });

    let Some(crop) = active else {
        return rsx! {
            section { class: "panel empty-state",
                h2 { class: "section-title", "Market Analysis" }
                p { class: "muted", "Select crops on the Planner tab to see prices and forecasts." }
            }
        };
    };

    let (snapshots, series) = state.with(|st| {
        let model = &st.reference.market;
        let snapshots: Vec<MarketSnapshot> = st
            .selected_crops
            .iter()
            .map(|name| MarketSnapshot::for_crop(model, name))
            .collect();
        let mut rng = SeededRandom::from_seed(seed());
        let series = project_prices(model, &crop, time_range.months(), show_forecast, &mut rng);
        (snapshots, series)
    });
    let changes = price_changes(&series);
    let (low, high) = price_bounds(&series);

    rsx! {
        div { class: "stack",
            div { class: "kpi-grid",
                for snapshot in snapshots {
                    div {
                        key: "{snapshot.crop}",
                        class: modifier_class("market-card", "active", snapshot.crop == crop),
                        onclick: {
                            let name = snapshot.crop.clone();
                            move |_| state.with_mut(|st| st.market_crop = Some(name.clone()))
                        },
                        KpiCard {
                            title: snapshot.crop.clone(),
                            value: format::price_per_kg(snapshot.current_price_per_kg),
                            icon: "🌾",
                            description: None,
                        }
                        div { class: "market-card__badges",
                            TrendBadge { trend: snapshot.trend }
                            SentimentBadge { sentiment: snapshot.forecast }
                        }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    div {
                        h2 { class: "section-title", "{crop} price history" }
                        p { class: "muted small", "Illustrative prices, not live market data." }
                    }
                    div { class: "toolbar",
                        select {
                            class: "input input--inline",
                            value: "{crop}",
                            onchange: move |evt| {
                                let name = evt.value();
                                state.with_mut(|st| st.market_crop = Some(name));
                            },
                            for name in selected {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                        select {
                            class: "input input--inline",
                            value: "{time_range.months()}",
                            onchange: move |evt| {
                                let range = evt
                                    .value()
                                    .parse::<usize>()
                                    .ok()
                                    .and_then(TimeRange::from_months)
                                    .unwrap_or_default();
                                state.with_mut(|st| st.time_range = range);
                                persist_user_state(&state);
                            },
                            for range in TimeRange::ALL {
                                option { value: "{range.months()}", "{range.label()}" }
                            }
                        }
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: show_forecast,
                                onchange: move |evt| {
                                    let enabled = evt.checked();
                                    state.with_mut(|st| st.show_forecast = enabled);
                                    persist_user_state(&state);
                                },
                            }
                            "Show forecast"
                        }
                        button {
                            class: "btn",
                            title: "Draw a new synthetic series",
                            onclick: move |_| seed.set(rand::random::<u64>()),
                            "↻ Regenerate"
                        }
                    }
                }

                PriceChart { points: series.clone(), low, high }

                table { class: "table",
                    thead {
                        tr {
                            th { "Period" }
                            th { "Price" }
                            th { "Change" }
                            th { "" }
                        }
                    }
                    tbody {
                        for (point, change) in series.into_iter().zip(changes) {
                            tr {
                                key: "{point.period_label}",
                                class: modifier_class("row", "projected", point.projected),
                                td { "{point.period_label}" }
                                td { "{format::price_per_kg(point.price)}" }
                                td { ChangeBadge { change } }
                                td {
                                    if point.projected {
                                        span { class: "badge badge--muted", "Forecast" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Column chart scaled between the lowest and highest point.
#[component]
fn PriceChart(points: Vec<PricePoint>, low: f64, high: f64) -> Element {
    let span = (high - low).max(f64::EPSILON);

    rsx! {
        div { class: "chart",
            for point in points {
                div {
                    key: "{point.period_label}",
                    class: modifier_class("chart__col", "projected", point.projected),
                    title: "{point.period_label}: {format::price_per_kg(point.price)}",
                    div {
                        class: "chart__bar",
                        style: "height: {bar_height(point.price, low, span):.0}%",
                    }
                    span { class: "chart__label", "{point.period_label}" }
                }
            }
        }
    }
}

fn price_bounds(points: &[PricePoint]) -> (f64, f64) {
    points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), point| {
        (lo.min(point.price), hi.max(point.price))
    })
}

// Bars never fully vanish so the lowest month is still visible.
fn bar_height(price: f64, low: f64, span: f64) -> f64 {
    20.0 + (price - low) / span * 80.0
}
