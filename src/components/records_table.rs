//! Paginated table over the stored chat records.
//!
//! The collection is fetched whole and sliced client-side; the body markup
//! for a page is built as a string with every field escaped, then injected
//! via `inner_html`.

#[cfg(test)]
#[path = "records_table_test.rs"]
mod records_table_test;

use leptos::prelude::*;

use crate::net::types::ChatRecord;
use crate::state::records::RecordsState;
use crate::util::escape::escape_html;

/// Records table with prev/next paging and an explicit page-jump input.
#[component]
pub fn RecordsTable() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let jump_input = RwSignal::new(String::new());

    let do_jump = move || {
        let raw = jump_input.get_untracked();
        let Ok(page) = raw.trim().parse::<usize>() else {
            records.update(|r| r.input_error = true);
            return;
        };
        let jumped = records.try_update(|r| r.jump_to_page(page)).unwrap_or(false);
        if jumped {
            jump_input.set(String::new());
        }
    };

    view! {
        <section class="records-table">
            <h2 class="records-table__title">"Chat Records"</h2>

            <div class="records-table__body">
                {move || {
                    let state = records.get();
                    if let Some(message) = state.error.clone() {
                        return view! {
                            <p class="records-table__error">
                                <i class="fa-solid fa-triangle-exclamation"></i>
                                {format!(" Failed to load records: {message}")}
                            </p>
                        }
                        .into_any();
                    }
                    if state.records.is_empty() {
                        if state.fetching {
                            return view! {
                                <p class="records-table__loading">
                                    "Loading... "
                                    <span class="loader"></span>
                                </p>
                            }
                            .into_any();
                        }
                        return view! {
                            <p class="records-table__empty">
                                <i class="fa-solid fa-info-circle"></i>
                                " No data yet."
                            </p>
                        }
                        .into_any();
                    }

                    let rows = state.page_rows();
                    if rows.is_empty() {
                        return view! {
                            <p class="records-table__empty">"No rows on this page."</p>
                        }
                        .into_any();
                    }
                    view! {
                        <table class="records-table__grid">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"User"</th>
                                    <th>"Type"</th>
                                    <th>"Question"</th>
                                    <th>"Response"</th>
                                    <th>"Answered"</th>
                                </tr>
                            </thead>
                            <tbody inner_html=rows_html(rows)></tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>

            <footer class="records-table__pager">
                {move || {
                    let state = records.get();
                    let show = state.error.is_none() && !state.records.is_empty();
                    show.then(|| {
                        let page = state.page;
                        let total = state.total_pages();
                        let prev_disabled = page <= 1;
                        let next_disabled = page >= total;
                        let input_class = if state.input_error {
                            "records-table__jump records-table__jump--error"
                        } else {
                            "records-table__jump"
                        };
                        view! {
                            <button
                                class="btn"
                                disabled=prev_disabled
                                on:click=move |_| records.update(|r| r.change_page(-1))
                            >
                                "Prev"
                            </button>
                            <span class="records-table__page">{format!("Page {page} / {total}")}</span>
                            <button
                                class="btn"
                                disabled=next_disabled
                                on:click=move |_| records.update(|r| r.change_page(1))
                            >
                                "Next"
                            </button>
                            <input
                                class=input_class
                                type="number"
                                min="1"
                                max=total.to_string()
                                placeholder="Go to"
                                prop:value=move || jump_input.get()
                                on:input=move |ev| {
                                    jump_input.set(event_target_value(&ev));
                                    records.update(|r| r.input_error = false);
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        do_jump();
                                    }
                                }
                            />
                            <button class="btn" on:click=move |_| do_jump()>
                                "Go"
                            </button>
                        }
                    })
                }}
            </footer>
        </section>
    }
}

/// Build the table body for one page of records as escaped HTML.
pub(crate) fn rows_html(rows: &[ChatRecord]) -> String {
    let mut html = String::new();
    for record in rows {
        let question_full = escape_html(record.question.as_deref().unwrap_or_default());
        let response_full = escape_html(record.response.as_deref().unwrap_or_default());
        let answered = if record.answered {
            r#"<i class="fa-solid fa-check records-table__cell--yes"></i> Yes"#
        } else {
            r#"<i class="fa-solid fa-times records-table__cell--no"></i> No"#
        };
        html.push_str(&format!(
            "<tr><td>{id}</td><td>{user}</td><td>{kind}</td>\
             <td title=\"{question_full}\">{question}</td>\
             <td title=\"{response_full}\">{response}</td>\
             <td>{answered}</td></tr>",
            id = record.id,
            user = text_cell(record.user_id.as_deref()),
            kind = text_cell(record.event_type.as_deref()),
            question = text_cell(record.question.as_deref()),
            response = text_cell(record.response.as_deref()),
        ));
    }
    html
}

/// Escaped cell text with a `-` fallback for absent or empty fields.
fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => "-".to_owned(),
    }
}
