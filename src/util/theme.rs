//! Theme initialization, application, and persistence.
//!
//! The explicit choice lives in `localStorage`; the applied theme is the
//! `data-theme` attribute on `<html>`. While no explicit choice is stored,
//! a `prefers-color-scheme` listener keeps the applied theme in step with
//! the system. Requires a browser environment.

use crate::state::ui::ThemeChoice;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "vox_console_theme";

/// Read the stored explicit choice, if any.
pub fn read_saved() -> Option<ThemeChoice> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
        ThemeChoice::parse(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the system currently prefers a dark scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Write the theme to the `data-theme` attribute on `<html>`.
pub fn apply(choice: ThemeChoice) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", choice.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = choice;
    }
}

/// Persist an explicit choice to `localStorage`.
pub fn persist(choice: ThemeChoice) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, choice.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = choice;
    }
}

/// Apply the saved or system theme at startup and arm the system-preference
/// listener. Returns the saved explicit choice for seeding the UI state.
pub fn init() -> Option<ThemeChoice> {
    let saved = read_saved();
    let applied = saved.unwrap_or(if system_prefers_dark() {
        ThemeChoice::Dark
    } else {
        ThemeChoice::Light
    });
    apply(applied);
    listen_for_system_changes();
    saved
}

/// Follow live system-preference changes while no explicit choice is stored.
#[cfg(feature = "hydrate")]
fn listen_for_system_changes() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(query) = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
    else {
        return;
    };

    let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            if read_saved().is_none() {
                apply(if event.matches() { ThemeChoice::Dark } else { ThemeChoice::Light });
            }
        },
    );
    let _ = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
    // The listener lives for the page's lifetime.
    callback.forget();
}

#[cfg(not(feature = "hydrate"))]
fn listen_for_system_changes() {}
