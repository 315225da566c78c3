//! Leptos view components for the console panels.

pub mod chat_panel;
pub mod records_table;
pub mod status_panel;
pub mod theme_toggle;
