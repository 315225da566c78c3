//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Cycle the theme preference and persist the explicit choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let system_dark = theme::system_prefers_dark();
        if let Some(choice) = ui.try_update(|u| u.toggle_theme(system_dark)) {
            theme::apply(choice);
            theme::persist(choice);
        }
    };

    view! {
        <button class="btn theme-toggle" title="Toggle theme" on:click=on_click>
            <i class="fa-solid fa-circle-half-stroke"></i>
        </button>
    }
}
