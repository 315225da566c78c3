//! Two-turn chat transcript animated from the event stream.
//!
//! Turns marked exiting stay in the tree with the exit-animation class and
//! are removed on the animation-end event or a fixed safety timeout,
//! whichever fires first; removal is idempotent either way.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;

use crate::state::chat::{ChatState, ChatTurn, Role};

/// Delay after which an exiting turn is removed even if its animation-end
/// event never fires.
#[cfg(feature = "hydrate")]
const EXIT_FALLBACK_MS: u32 = 550;

/// Transcript panel showing the current question and the bot reply as it
/// streams in.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Fallback removal timers already armed, keyed by turn id.
    // Wrapped in `SendWrapper` so the reactive render closure below satisfies
    // the `Send` bound Leptos requires; the value is only ever touched on the
    // single-threaded wasm client.
    let armed: SendWrapper<std::rc::Rc<std::cell::RefCell<std::collections::HashSet<u64>>>> =
        SendWrapper::new(std::rc::Rc::new(std::cell::RefCell::new(
            std::collections::HashSet::new(),
        )));

    // Keep the newest text in view.
    Effect::new(move || {
        let state = chat.get();
        let _ = (state.turns.len(), state.bot_text.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = transcript_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <section class="chat-panel">
            <h2 class="chat-panel__title">"Live Chat"</h2>
            <div class="chat-panel__transcript" node_ref=transcript_ref>
                {move || {
                    let state = chat.get();
                    let typing = state.typing();
                    state
                        .turns
                        .iter()
                        .map(|turn| {
                            arm_exit_fallback(&armed, turn, chat);
                            turn_view(chat, turn, typing)
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

fn turn_view(chat: RwSignal<ChatState>, turn: &ChatTurn, typing: bool) -> impl IntoView + use<> {
    let id = turn.id;
    let role_class = match turn.role {
        Role::User => "chat-panel__turn--user",
        Role::Bot => "chat-panel__turn--bot",
    };
    let class = if turn.exiting {
        format!("chat-panel__turn {role_class} chat-panel__turn--exit")
    } else {
        format!("chat-panel__turn {role_class}")
    };
    let show_typing = typing && turn.role == Role::Bot && !turn.exiting;
    let text = turn.text.clone();

    // finish_evict only removes exiting turns, so the entrance animation
    // ending on a live turn is a no-op here.
    view! {
        <div class=class on:animationend=move |_| chat.update(|c| c.finish_evict(id))>
            <p class="chat-panel__text">{text}</p>
            {show_typing.then(|| {
                view! {
                    <span class="chat-panel__typing" aria-label="typing">
                        <span class="chat-panel__dot"></span>
                        <span class="chat-panel__dot"></span>
                        <span class="chat-panel__dot"></span>
                    </span>
                }
            })}
        </div>
    }
}

/// Arm the one-shot safety timeout for an exiting turn, once per turn.
fn arm_exit_fallback(
    armed: &std::rc::Rc<std::cell::RefCell<std::collections::HashSet<u64>>>,
    turn: &ChatTurn,
    chat: RwSignal<ChatState>,
) {
    #[cfg(feature = "hydrate")]
    {
        if !turn.exiting {
            return;
        }
        let id = turn.id;
        if !armed.borrow_mut().insert(id) {
            return;
        }
        let armed = std::rc::Rc::clone(armed);
        gloo_timers::callback::Timeout::new(EXIT_FALLBACK_MS, move || {
            armed.borrow_mut().remove(&id);
            chat.update(|c| c.finish_evict(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (armed, turn, chat);
    }
}
