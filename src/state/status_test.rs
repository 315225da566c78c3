use super::*;

fn snapshot() -> StatusSnapshot {
    StatusSnapshot {
        processing: true,
        stt: true,
        mic: false,
        player: true,
        chat_ids: "111".to_owned(),
    }
}

#[test]
fn status_state_defaults_to_loading() {
    let state = StatusState::default();
    assert!(state.snapshot.is_none());
    assert_eq!(state.link, LinkHealth::Loading);
}

#[test]
fn apply_snapshot_replaces_wholesale_and_goes_live() {
    let mut state = StatusState::default();
    state.apply_snapshot(snapshot());
    assert_eq!(state.link, LinkHealth::Live);

    let mut second = snapshot();
    second.mic = true;
    second.chat_ids = "222".to_owned();
    state.apply_snapshot(second.clone());
    assert_eq!(state.snapshot, Some(second));
}

#[test]
fn fetch_failure_clears_snapshot() {
    let mut state = StatusState::default();
    state.apply_snapshot(snapshot());
    state.mark_fetch_failed();
    assert!(state.snapshot.is_none());
    assert_eq!(state.link, LinkHealth::FetchFailed);
}

#[test]
fn lost_then_reconnecting_goes_back_to_loading() {
    let mut state = StatusState::default();
    state.apply_snapshot(snapshot());
    state.mark_lost();
    assert_eq!(state.link, LinkHealth::Lost);

    state.reconnecting();
    assert_eq!(state.link, LinkHealth::Loading);
}

#[test]
fn reconnecting_does_not_touch_a_live_panel() {
    let mut state = StatusState::default();
    state.apply_snapshot(snapshot());
    state.reconnecting();
    assert_eq!(state.link, LinkHealth::Live);
}

#[test]
fn snapshot_recovers_after_loss() {
    let mut state = StatusState::default();
    state.mark_lost();
    state.apply_snapshot(snapshot());
    assert_eq!(state.link, LinkHealth::Live);
    assert!(state.snapshot.is_some());
}
