use super::*;

fn live_count(state: &ChatState, role: Role) -> usize {
    state.turns.iter().filter(|t| t.role == role && !t.exiting).count()
}

// =============================================================
// Question / delta flow
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.turns.is_empty());
    assert!(state.bot_text.is_empty());
    assert_eq!(state.phase, ChatPhase::Idle);
    assert!(!state.typing());
}

#[test]
fn begin_question_creates_user_turn_and_bot_placeholder() {
    let mut state = ChatState::default();
    state.begin_question("hi");

    assert_eq!(live_count(&state, Role::User), 1);
    assert_eq!(live_count(&state, Role::Bot), 1);

    let user = state.live_turn(Role::User).expect("user turn");
    assert_eq!(user.text, "hi");
    assert!(!user.placeholder);

    let bot = state.live_turn(Role::Bot).expect("bot turn");
    assert!(bot.text.is_empty());
    assert!(bot.placeholder);

    assert_eq!(state.phase, ChatPhase::AwaitingBot);
    assert!(state.typing());
}

#[test]
fn deltas_accumulate_into_bot_text() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    assert!(state.append_delta("He"));
    assert!(state.append_delta("llo"));

    assert_eq!(state.bot_text, "Hello");
    assert_eq!(state.live_turn(Role::Bot).expect("bot turn").text, "Hello");
    assert_eq!(state.phase, ChatPhase::BotTyping);
    assert_eq!(live_count(&state, Role::User), 1);
    assert_eq!(live_count(&state, Role::Bot), 1);
}

#[test]
fn delta_without_bot_turn_is_dropped() {
    let mut state = ChatState::default();
    assert!(!state.append_delta("orphan"));
    assert!(state.bot_text.is_empty());
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn new_question_evicts_previous_turns_and_resets_bot_text() {
    let mut state = ChatState::default();
    state.begin_question("first");
    state.append_delta("old answer");

    state.begin_question("second");

    assert_eq!(live_count(&state, Role::User), 1);
    assert_eq!(live_count(&state, Role::Bot), 1);
    assert_eq!(state.turns.iter().filter(|t| t.exiting).count(), 2);
    assert!(state.bot_text.is_empty());
    assert_eq!(state.live_turn(Role::User).expect("user turn").text, "second");
}

// =============================================================
// Typing indicator
// =============================================================

#[test]
fn typing_idle_settles_and_deltas_restart_typing() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    state.append_delta("partial");

    state.typing_idle();
    assert_eq!(state.phase, ChatPhase::Settled);
    assert!(!state.typing());

    // A late delta still appends and brings the indicator back.
    assert!(state.append_delta(" more"));
    assert_eq!(state.bot_text, "partial more");
    assert!(state.typing());
}

#[test]
fn typing_idle_is_a_noop_when_not_typing() {
    let mut state = ChatState::default();
    state.typing_idle();
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn bot_turn_with_initial_text_suppresses_typing() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    assert!(state.typing());

    state.push_bot_turn("canned reply", false);
    assert!(!state.typing());
    assert_eq!(state.phase, ChatPhase::Settled);
}

#[test]
fn replacement_placeholder_evicts_previous_bot_turn() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    state.append_delta("text");

    state.push_bot_turn("", true);

    assert_eq!(live_count(&state, Role::Bot), 1);
    let bot = state.live_turn(Role::Bot).expect("bot turn");
    assert!(bot.placeholder);
    assert!(state.typing());
}

// =============================================================
// Eviction cleanup
// =============================================================

#[test]
fn finish_evict_removes_only_exiting_turns() {
    let mut state = ChatState::default();
    state.begin_question("first");
    state.begin_question("second");

    let exiting_ids: Vec<u64> =
        state.turns.iter().filter(|t| t.exiting).map(|t| t.id).collect();
    let live_user_id = state.live_turn(Role::User).expect("user turn").id;

    for id in &exiting_ids {
        state.finish_evict(*id);
    }
    assert_eq!(state.turns.len(), 2);

    // A stray call for a live turn must not remove it.
    state.finish_evict(live_user_id);
    assert_eq!(live_count(&state, Role::User), 1);
}

#[test]
fn finish_evict_is_idempotent() {
    let mut state = ChatState::default();
    state.begin_question("first");
    state.begin_question("second");

    let id = state
        .turns
        .iter()
        .find(|t| t.exiting)
        .map(|t| t.id)
        .expect("exiting turn");

    state.finish_evict(id);
    let len = state.turns.len();
    state.finish_evict(id);
    assert_eq!(state.turns.len(), len);
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_immediate_drops_everything_at_once() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    state.append_delta("partial");

    state.clear(true);

    assert!(state.turns.is_empty());
    assert!(state.bot_text.is_empty());
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn clear_animated_marks_turns_exiting() {
    let mut state = ChatState::default();
    state.begin_question("hi");

    state.clear(false);

    assert_eq!(state.turns.len(), 2);
    assert!(state.turns.iter().all(|t| t.exiting));
    assert!(!state.typing());
}
