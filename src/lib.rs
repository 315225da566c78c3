//! # vox-console
//!
//! Leptos + WASM dashboard for the voice-assistant runtime. Shows the live
//! runtime status (processing, speech-to-text, microphone, player, monitored
//! chat ids), a two-turn chat transcript animated from the server's event
//! stream, and a paginated table of stored chat records.
//!
//! All browser-only work (HTTP, the status event stream, timers, storage) is
//! gated behind the `hydrate` feature with inert fallbacks, so the state and
//! parsing layers compile and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the host page after the bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
