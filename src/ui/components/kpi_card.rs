use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, icon: &'static str, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "panel kpi",
            div { class: "kpi__header",
                h3 { class: "label", "{title}" }
                span { class: "kpi__icon", "{icon}" }
            }
            p { class: "kpi__value", "{value}" }
            if let Some(desc) = description {
                p { class: "muted small", "{desc}" }
            }
        }
    }
}
