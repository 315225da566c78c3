//! REST helpers for the status and record endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade into visible UI states without crashing hydration.

#![allow(clippy::unused_async)]

use leptos::prelude::RwSignal;

use crate::net::types::{ChatRecord, StatusSnapshot};
use crate::state::records::RecordsState;
use crate::state::status::StatusState;

/// Fetch the current runtime status from `GET /status`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-success status.
pub async fn fetch_status() -> Result<StatusSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/status")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json::<StatusSnapshot>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the full record collection from `GET /records`.
///
/// A non-success response surfaces the server's `{error}` message when the
/// body carries one, else a generic status-code message.
///
/// # Errors
///
/// Returns the user-facing error string described above.
pub async fn fetch_records() -> Result<Vec<ChatRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: Option<String>,
        }

        let resp = gloo_net::http::Request::get("/records")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let code = resp.status();
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP {code}"));
            return Err(message);
        }
        resp.json::<Vec<ChatRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the status snapshot into the panel state.
pub async fn load_status(status: RwSignal<StatusState>) {
    use leptos::prelude::Update;

    match fetch_status().await {
        Ok(snapshot) => status.update(|s| s.apply_snapshot(snapshot)),
        Err(e) => {
            leptos::logging::warn!("status fetch failed: {e}");
            status.update(StatusState::mark_fetch_failed);
        }
    }
}

/// Fetch the record collection into the table state.
///
/// Overlapping triggers collapse to one request: if a fetch is already in
/// flight this call is a no-op.
pub async fn load_records(records: RwSignal<RecordsState>) {
    use leptos::prelude::Update;

    let claimed = records.try_update(RecordsState::begin_fetch).unwrap_or(false);
    if !claimed {
        leptos::logging::log!("record fetch already in flight, skipping");
        return;
    }

    let result = fetch_records().await;
    records.update(|r| r.finish_fetch(result));
}
