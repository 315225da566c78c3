//! Root application component with shared state contexts.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::dashboard::DashboardPage;
use crate::state::{chat::ChatState, records::RecordsState, status::StatusState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one reactive state context per domain, applies the saved theme,
/// and starts the initial fetches plus the status event stream.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let status = RwSignal::new(StatusState::default());
    let chat = RwSignal::new(ChatState::default());
    let records = RwSignal::new(RecordsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(status);
    provide_context(chat);
    provide_context(records);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    boot(status, chat, records, ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/vox-console.css"/>
        <Title text="Vox Console"/>

        <DashboardPage/>
    }
}

/// One-time browser startup: theme, initial snapshot, record list, stream.
#[cfg(feature = "hydrate")]
fn boot(
    status: RwSignal<StatusState>,
    chat: RwSignal<ChatState>,
    records: RwSignal<RecordsState>,
    ui: RwSignal<UiState>,
) {
    let saved = crate::util::theme::init();
    ui.update(|u| u.theme = saved);

    leptos::task::spawn_local(crate::net::api::load_status(status));
    leptos::task::spawn_local(crate::net::api::load_records(records));
    crate::net::stream_client::spawn_stream_client(status, chat, records);
}
