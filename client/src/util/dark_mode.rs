//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` (falling back to the
//! `prefers-color-scheme` media query) and applies the `dark-mode` class to
//! `<body>`. Toggle reads that class back as the current state, writes the
//! new preference and updates the class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Every DOM lookup is guarded; a page without `<body>` access silently keeps
//! its theme. SSR paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::preference_store::BrowserStorage;
use crate::util::theme::{Theme, ThemeController};

/// Class on `<body>` marking the dark theme.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Whether the operating environment asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the initial theme from storage, then the system preference.
pub fn read_preference(storage_key: &'static str) -> Theme {
    ThemeController::new(BrowserStorage, storage_key).initial(system_prefers_dark())
}

/// Theme currently shown on the page, or `None` without a `<body>`.
pub fn applied_theme() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())?;
        Some(Theme::from_dark(body.class_list().contains(DARK_MODE_CLASS)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Add or remove the `dark-mode` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if theme.is_dark() { classes.add_1(DARK_MODE_CLASS) } else { classes.remove_1(DARK_MODE_CLASS) };
        if result.is_err() {
            leptos::logging::warn!("failed to apply {} theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the page theme and persist the new preference.
///
/// `fallback` stands in for the page state when `<body>` is unreachable.
pub fn toggle(storage_key: &'static str, fallback: Theme) -> Theme {
    let current = applied_theme().unwrap_or(fallback);
    let next = ThemeController::new(BrowserStorage, storage_key).toggle(current);
    apply(next);
    next
}
