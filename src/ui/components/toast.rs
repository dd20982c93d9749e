use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn tone(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Success => "toast--success",
            ToastKind::Warning => "toast--warning",
            ToastKind::Error => "toast--error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_VISIBLE {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(kind, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-host",
            ul {
                class: "toast-list",
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    rsx! {
        li {
            class: "toast {message.kind.tone()}",
            span { class: "toast__icon", "{message.kind.icon()}" }
            p { class: "toast__text", "{message.text}" }
            button {
                class: "toast__dismiss",
                onclick: move |_| {
                    let target = message.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_distinct_ids() {
        let a = ToastMessage::new(ToastKind::Info, "one");
        let b = ToastMessage::new(ToastKind::Info, "two");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("toast-"));
    }

    #[test]
    fn every_kind_has_its_own_tone() {
        let tones = [
            ToastKind::Info.tone(),
            ToastKind::Success.tone(),
            ToastKind::Warning.tone(),
            ToastKind::Error.tone(),
        ];
        for (i, tone) in tones.iter().enumerate() {
            assert!(tone.starts_with("toast--"));
            assert!(!tones[i + 1..].contains(tone));
        }
    }
}
