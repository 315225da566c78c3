use super::*;

fn record(id: i64) -> ChatRecord {
    ChatRecord {
        id,
        user_id: Some(format!("u-{id}")),
        event_type: Some("danmaku".to_owned()),
        question: Some(format!("question {id}")),
        response: Some(format!("response {id}")),
        answered: id % 2 == 0,
    }
}

fn records(n: i64) -> Vec<ChatRecord> {
    (1..=n).map(record).collect()
}

// =============================================================
// Page arithmetic
// =============================================================

#[test]
fn total_pages_is_ceil_with_floor_of_one() {
    let mut state = RecordsState::default();
    assert_eq!(state.total_pages(), 1);

    for (n, expected) in [(1, 1), (9, 1), (10, 1), (11, 2), (20, 2), (21, 3)] {
        state.set_records(records(n));
        assert_eq!(state.total_pages(), expected, "n = {n}");
    }
}

#[test]
fn page_rows_slices_the_collection() {
    let mut state = RecordsState::default();
    state.set_records(records(23));

    assert_eq!(state.page_rows().len(), 10);
    assert_eq!(state.page_rows()[0].id, 1);

    state.jump_to_page(3);
    assert_eq!(state.page_rows().len(), 3);
    assert_eq!(state.page_rows()[0].id, 21);
}

#[test]
fn page_rows_is_empty_for_an_empty_collection() {
    let state = RecordsState::default();
    assert!(state.page_rows().is_empty());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn change_page_steps_within_bounds() {
    let mut state = RecordsState::default();
    state.set_records(records(25));

    state.change_page(1);
    assert_eq!(state.page, 2);
    state.change_page(1);
    assert_eq!(state.page, 3);
    state.change_page(1);
    assert_eq!(state.page, 3);

    state.change_page(-1);
    assert_eq!(state.page, 2);
}

#[test]
fn change_page_ignores_steps_off_the_first_page() {
    let mut state = RecordsState::default();
    state.set_records(records(5));
    state.change_page(-1);
    assert_eq!(state.page, 1);
}

#[test]
fn jump_rejects_zero_and_past_the_end() {
    let mut state = RecordsState::default();
    state.set_records(records(25));
    state.jump_to_page(2);

    assert!(!state.jump_to_page(0));
    assert_eq!(state.page, 2);
    assert!(state.input_error);

    assert!(!state.jump_to_page(4));
    assert_eq!(state.page, 2);
    assert!(state.input_error);
}

#[test]
fn valid_jump_clears_the_input_error() {
    let mut state = RecordsState::default();
    state.set_records(records(25));

    assert!(!state.jump_to_page(99));
    assert!(state.input_error);

    assert!(state.jump_to_page(3));
    assert_eq!(state.page, 3);
    assert!(!state.input_error);
}

#[test]
fn page_one_is_always_valid() {
    let mut state = RecordsState::default();
    assert!(state.jump_to_page(1));
    assert!(!state.input_error);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_suppresses_overlapping_fetches() {
    let mut state = RecordsState::default();
    assert!(state.begin_fetch());
    assert!(!state.begin_fetch());

    state.finish_fetch(Ok(records(3)));
    assert!(!state.fetching);
    assert!(state.begin_fetch());
}

#[test]
fn finish_fetch_success_replaces_records_and_clears_error() {
    let mut state = RecordsState::default();
    state.error = Some("old failure".to_owned());

    assert!(state.begin_fetch());
    state.finish_fetch(Ok(records(12)));

    assert_eq!(state.records.len(), 12);
    assert_eq!(state.error, None);
}

#[test]
fn finish_fetch_error_keeps_previous_records() {
    let mut state = RecordsState::default();
    state.set_records(records(12));

    assert!(state.begin_fetch());
    state.finish_fetch(Err("HTTP 500".to_owned()));

    assert_eq!(state.records.len(), 12);
    assert_eq!(state.error.as_deref(), Some("HTTP 500"));
}

#[test]
fn refetch_clamps_an_out_of_range_page() {
    let mut state = RecordsState::default();
    state.set_records(records(35));
    state.jump_to_page(4);

    state.set_records(records(12));
    assert_eq!(state.page, 2);

    state.set_records(Vec::new());
    assert_eq!(state.page, 1);
}
