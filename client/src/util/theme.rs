//! Light/dark theme model and its persistence rules.
//!
//! DESIGN
//! ======
//! Initial resolution: an explicit stored preference wins, then the ambient
//! system preference, then light. A toggle inverts the theme the caller
//! observed on the page, not a cached copy, persists the result and returns
//! it for the caller to apply.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::preference_store::PreferenceStore;

const DARK: &str = "dark";
const LIGHT: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

/// Any stored value other than `"dark"` counts as an explicit light choice.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(value) => Theme::from_dark(value == DARK),
        None => Theme::from_dark(system_prefers_dark),
    }
}

/// CSS `display` values for the (light, dark) icon pair.
pub fn icon_display(theme: Theme) -> (&'static str, &'static str) {
    if theme.is_dark() { ("none", "block") } else { ("block", "none") }
}

/// Reads and writes the theme preference through a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: &'static str,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn stored(&self) -> Option<String> {
        self.store.get(self.key)
    }

    pub fn initial(&self, system_prefers_dark: bool) -> Theme {
        resolve_initial(self.stored().as_deref(), system_prefers_dark)
    }

    /// Inverts `current`, persists the new theme and returns it.
    pub fn toggle(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.set(self.key, next.as_str());
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
