#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the header, mobile menu, theme, and scroll-derived flags.
///
/// Fields are plain values; the whole struct lives in an `RwSignal`
/// provided via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    pub scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

/// Display theme, persisted across page loads under the `"theme"` key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Anything other than `"dark"` is light,
    /// so a corrupted stored value degrades to the default.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// The persisted representation, one of `"dark"`/`"light"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
