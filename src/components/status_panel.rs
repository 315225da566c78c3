//! Runtime status panel: one row per status field.
//!
//! Every field renders one of loading (no value yet), a boolean icon+label
//! pair, literal text, or one of the two failure glyphs (fetch failed vs
//! stream lost), rebuilt wholesale whenever the state changes.

use leptos::prelude::*;

use crate::net::types::StatusSnapshot;
use crate::state::status::{LinkHealth, StatusState};

/// Status panel listing the runtime flags and the monitored chat ids.
#[component]
pub fn StatusPanel() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    view! {
        <section class="status-panel">
            <h2 class="status-panel__title">"Runtime Status"</h2>
            <ul class="status-panel__list">
                {move || {
                    let state = status.get();
                    vec![
                        item("Processing", value_view(&state, |s| {
                            bool_view(s.processing, "fa-toggle-on", "fa-toggle-off", "On", "Off")
                        })),
                        item("Speech to text", value_view(&state, |s| {
                            bool_view(s.stt, "fa-toggle-on", "fa-toggle-off", "On", "Off")
                        })),
                        item("Microphone", value_view(&state, |s| {
                            bool_view(s.mic, "fa-microphone", "fa-microphone-slash", "On", "Off")
                        })),
                        item("Player", value_view(&state, |s| {
                            bool_view(s.player, "fa-play", "fa-pause", "Playing", "Stopped")
                        })),
                        item("Chat ids", value_view(&state, |s| text_view(&s.chat_ids))),
                    ]
                }}
            </ul>
        </section>
    }
}

fn item(label: &'static str, value: AnyView) -> AnyView {
    view! {
        <li class="status-panel__item">
            <span class="status-panel__label">{label}</span>
            <span class="status-panel__value">{value}</span>
        </li>
    }
    .into_any()
}

/// Pick the rendering for one field: failure states win over the snapshot,
/// and a missing snapshot renders as loading.
fn value_view(state: &StatusState, render: impl Fn(&StatusSnapshot) -> AnyView) -> AnyView {
    match state.link {
        LinkHealth::Lost => lost_view(),
        LinkHealth::FetchFailed => failure_view(),
        LinkHealth::Loading | LinkHealth::Live => match &state.snapshot {
            Some(snapshot) => render(snapshot),
            None => loading_view(),
        },
    }
}

fn bool_view(
    value: bool,
    icon_true: &str,
    icon_false: &str,
    text_true: &str,
    text_false: &str,
) -> AnyView {
    let icon = if value { icon_true } else { icon_false };
    let tone = if value { "status-panel__value--on" } else { "status-panel__value--off" };
    let label = if value { text_true } else { text_false };
    view! {
        <i class=format!("fa-solid {icon} {tone}")></i>
        <span>{format!(" {label}")}</span>
    }
    .into_any()
}

fn text_view(value: &str) -> AnyView {
    let shown = if value.is_empty() { "N/A".to_owned() } else { value.to_owned() };
    view! { <span class="status-panel__value--literal">{shown}</span> }.into_any()
}

fn loading_view() -> AnyView {
    view! { <span class="loader"></span> }.into_any()
}

fn failure_view() -> AnyView {
    view! {
        <i class="fa-solid fa-triangle-exclamation status-panel__value--error"></i>
        <span>" Unavailable"</span>
    }
    .into_any()
}

fn lost_view() -> AnyView {
    view! {
        <i class="fa-solid fa-plug-circle-xmark status-panel__value--error"></i>
        <span>" Connection lost"</span>
    }
    .into_any()
}
