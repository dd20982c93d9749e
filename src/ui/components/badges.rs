use dioxus::prelude::*;

use crate::domain::{Difficulty, QualityGrade, Sentiment, Trend};

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> Element {
    let tone = match difficulty {
        Difficulty::Easy => "badge--good",
        Difficulty::Medium => "badge--neutral",
        Difficulty::Hard => "badge--bad",
    };

    rsx! {
        span {
            class: "badge {tone}",
            title: "Difficulty level: {difficulty.label()}",
            "{difficulty.label()}"
        }
    }
}

#[component]
pub fn TrendBadge(trend: Trend) -> Element {
    let (icon, tone) = match trend {
        Trend::Up => ("↗", "badge--good"),
        Trend::Down => ("↘", "badge--bad"),
        Trend::Stable => ("→", "badge--neutral"),
    };

    rsx! {
        span { class: "badge {tone}", "{icon} {trend.label()}" }
    }
}

#[component]
pub fn SentimentBadge(sentiment: Sentiment) -> Element {
    let (icon, tone) = match sentiment {
        Sentiment::Positive => ("📈", "badge--good"),
        Sentiment::Negative => ("📉", "badge--bad"),
        Sentiment::Neutral => ("📊", "badge--neutral"),
    };

    rsx! {
        span { class: "badge {tone}", "{icon} {sentiment.label()}" }
    }
}

#[component]
pub fn GradeBadge(grade: Option<QualityGrade>) -> Element {
    let (label, tone) = match grade {
        Some(g @ (QualityGrade::Excellent | QualityGrade::Good)) => (g.label(), "badge--good"),
        Some(QualityGrade::Fair) => ("Fair", "badge--neutral"),
        Some(QualityGrade::Poor) => ("Poor", "badge--bad"),
        None => ("N/A", "badge--muted"),
    };

    rsx! {
        span { class: "badge {tone}", "{label}" }
    }
}

/// Signed percentage change, coloured by direction.
#[component]
pub fn ChangeBadge(change: Option<f64>) -> Element {
    let Some(pct) = change else {
        return rsx! { span { class: "muted", "-" } };
    };
    let tone = if pct > 0.0 { "badge--good" } else { "badge--bad" };

    rsx! {
        span { class: "badge {tone}", "{pct:+.2}%" }
    }
}
