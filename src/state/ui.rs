#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state. The theme is three-way: an explicit choice, or `None`
/// to follow the system preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub theme: Option<ThemeChoice>,
}

/// An explicitly chosen theme, as persisted to storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    /// Storage/attribute value for this choice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized counts as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// The theme a toggle press lands on.
///
/// Explicit choices flip light↔dark. From the unset state the displayed
/// theme is the system one, so the first press moves to its opposite.
pub fn next_theme(current: Option<ThemeChoice>, system_dark: bool) -> ThemeChoice {
    match current {
        Some(ThemeChoice::Light) => ThemeChoice::Dark,
        Some(ThemeChoice::Dark) => ThemeChoice::Light,
        None => {
            if system_dark {
                ThemeChoice::Light
            } else {
                ThemeChoice::Dark
            }
        }
    }
}

impl UiState {
    /// Cycle the theme and make the result the stored explicit choice.
    pub fn toggle_theme(&mut self, system_dark: bool) -> ThemeChoice {
        let next = next_theme(self.theme, system_dark);
        self.theme = Some(next);
        next
    }
}
