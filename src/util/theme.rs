//! Theme persistence and DOM application.
//!
//! Reads the saved theme from `localStorage` and applies the `dark` class
//! to `<body>`. Toggle writes the new value back. With nothing stored,
//! the `prefers-color-scheme` media query decides the initial theme.
//! Requires a browser environment; non-hydrate builds fall back to the
//! default theme and no-op application.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the persisted theme, falling back to the system preference and
/// then to the default.
#[must_use]
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        if let Ok(Some(storage)) = window.local_storage()
            && let Ok(Some(saved)) = storage.get_item(STORAGE_KEY)
        {
            return Theme::parse(&saved);
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(Theme::default(), |mq| if mq.matches() { Theme::Dark } else { Theme::Light })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply or remove the `dark` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if theme.is_dark() {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Ok(Some(storage)) = window.local_storage()
        {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
