//! The console's single page: status, live chat, and records.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::records_table::RecordsTable;
use crate::components::status_panel::StatusPanel;
use crate::components::theme_toggle::ThemeToggle;

/// Dashboard page composing the console panels.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Vox Console"</h1>
                <ThemeToggle/>
            </header>
            <main class="dashboard-page__grid">
                <StatusPanel/>
                <ChatPanel/>
                <RecordsTable/>
            </main>
        </div>
    }
}
