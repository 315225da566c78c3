//! Client for the `/status-stream` server-sent event feed.
//!
//! The stream client owns the single live `EventSource`: a spawned loop
//! connects, dispatches each JSON event into the status/chat/records state,
//! and on transport error tears the connection down and retries after a
//! fixed delay. The typing-idle timer for the chat panel also lives here,
//! since only the dispatch path arms it.
//!
//! Browser wiring is gated behind `hydrate`; the event-application logic is
//! plain code so it can be unit-tested natively.

#[cfg(test)]
#[path = "stream_client_test.rs"]
mod stream_client_test;

use crate::net::types::StreamEvent;
use crate::state::chat::ChatState;
use crate::state::status::StatusState;

/// Delay before reopening a dropped stream.
pub const RECONNECT_DELAY_MS: u32 = 5_000;

/// Deltas pausing for this long settle the typing indicator.
pub const TYPING_IDLE_MS: u32 = 1_500;

/// What the dispatch glue must do after an event is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The server flagged a record change; refetch the table.
    pub refresh_records: bool,
    /// The chat accepted a question or delta; re-arm the idle timer.
    pub arm_typing_timer: bool,
}

/// Apply one stream event: snapshot first, then the chat transition, in
/// delivery order.
pub fn apply_stream_event(
    event: &StreamEvent,
    status: &mut StatusState,
    chat: &mut ChatState,
) -> EventOutcome {
    status.apply_snapshot(event.status.clone());
    EventOutcome {
        refresh_records: event.db_updated == Some(true),
        arm_typing_timer: apply_chat_event(event, chat),
    }
}

/// Chat-side of an event: a new question opens a fresh exchange, otherwise
/// a delta extends the current bot reply. Returns whether the idle timer
/// needs re-arming.
pub fn apply_chat_event(event: &StreamEvent, chat: &mut ChatState) -> bool {
    if event.question_updated == Some(true) {
        if let Some(question) = event.question.as_deref() {
            chat.begin_question(question);
            return true;
        }
    }
    if let Some(chunk) = event.delta_chunk.as_deref() {
        return chat.append_delta(chunk);
    }
    false
}

/// Spawn the stream client lifecycle as a local async task.
#[cfg(feature = "hydrate")]
pub fn spawn_stream_client(
    status: leptos::prelude::RwSignal<StatusState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    records: leptos::prelude::RwSignal<crate::state::records::RecordsState>,
) {
    leptos::task::spawn_local(stream_client_loop(status, chat, records));
}

/// Main connection loop with fixed-delay reconnect.
#[cfg(feature = "hydrate")]
async fn stream_client_loop(
    status: leptos::prelude::RwSignal<StatusState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    records: leptos::prelude::RwSignal<crate::state::records::RecordsState>,
) {
    use leptos::prelude::Update;
    use std::cell::RefCell;
    use std::rc::Rc;

    let typing_timer: Rc<RefCell<Option<gloo_timers::callback::Timeout>>> =
        Rc::new(RefCell::new(None));

    loop {
        match connect_and_run(status, chat, records, &typing_timer).await {
            Ok(()) => leptos::logging::log!("status stream ended"),
            Err(e) => leptos::logging::warn!("status stream error: {e}"),
        }

        // Transport failure: cancel the pending typing timer, flip the
        // panel to connection-lost, wipe the transcript with no animation.
        typing_timer.borrow_mut().take();
        status.update(StatusState::mark_lost);
        chat.update(|c| c.clear(true));

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            RECONNECT_DELAY_MS,
        )))
        .await;
    }
}

/// Open the stream and process events until it drops.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    status: leptos::prelude::RwSignal<StatusState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    records: leptos::prelude::RwSignal<crate::state::records::RecordsState>,
    typing_timer: &std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Timeout>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::eventsource::futures::EventSource;
    use leptos::prelude::Update;

    // The previous EventSource was dropped (closing its connection) before
    // this runs, so there is exactly one live stream at a time.
    let mut source = EventSource::new("/status-stream").map_err(|e| e.to_string())?;
    let mut events = source.subscribe("message").map_err(|e| e.to_string())?;

    status.update(StatusState::reconnecting);
    // One refetch per (re)open covers events missed while disconnected.
    crate::net::api::load_status(status).await;

    while let Some(item) = events.next().await {
        let message = match item {
            Ok((_, message)) => message,
            Err(e) => return Err(e.to_string()),
        };
        let Some(text) = message.data().as_string() else {
            continue;
        };
        match serde_json::from_str::<StreamEvent>(&text) {
            Ok(event) => dispatch(&event, status, chat, records, typing_timer),
            Err(e) => {
                leptos::logging::warn!("malformed stream payload: {e}; raw: {text}");
            }
        }
    }
    Ok(())
}

/// Apply one parsed event to the state signals and run the side effects it
/// calls for.
#[cfg(feature = "hydrate")]
fn dispatch(
    event: &StreamEvent,
    status: leptos::prelude::RwSignal<StatusState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    records: leptos::prelude::RwSignal<crate::state::records::RecordsState>,
    typing_timer: &std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Timeout>>>,
) {
    use leptos::prelude::Update;

    let mut outcome = EventOutcome::default();
    status.update(|s| {
        chat.update(|c| {
            outcome = apply_stream_event(event, s, c);
        });
    });

    if outcome.refresh_records {
        leptos::task::spawn_local(crate::net::api::load_records(records));
    }
    if outcome.arm_typing_timer {
        arm_typing_timer(typing_timer, chat);
    }
}

/// Re-arm the typing-idle timer, cancelling the previous one.
#[cfg(feature = "hydrate")]
fn arm_typing_timer(
    slot: &std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Timeout>>>,
    chat: leptos::prelude::RwSignal<ChatState>,
) {
    use leptos::prelude::Update;

    let timeout = gloo_timers::callback::Timeout::new(TYPING_IDLE_MS, move || {
        chat.update(ChatState::typing_idle);
    });
    // Replacing the slot drops, and thereby cancels, the old timer.
    *slot.borrow_mut() = Some(timeout);
}
