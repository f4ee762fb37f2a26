//! Widget defaults shared through Leptos context.
//!
//! Values are compile-time constants so the server render and the hydrated
//! client always agree on them.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::time::Duration;

use chrono::Locale;

/// localStorage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Long date pattern, e.g. `martes, 19 de octubre de 2021`.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %-d de %B de %Y";

/// Time-with-seconds pattern, e.g. `14:35:05`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

pub const DEFAULT_CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// A single entry in the navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const DEFAULT_NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Inicio", href: "#inicio" },
    NavLink { label: "Reloj", href: "#reloj" },
    NavLink { label: "Calendario", href: "#calendario" },
];

/// Clock text patterns and refresh period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockSettings {
    pub date_format: &'static str,
    pub time_format: &'static str,
    pub period: Duration,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self { date_format: DEFAULT_DATE_FORMAT, time_format: DEFAULT_TIME_FORMAT, period: DEFAULT_CLOCK_PERIOD }
    }
}

/// Page-wide settings provided once by `App`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSettings {
    pub title: &'static str,
    /// Value of the `<html lang>` attribute.
    pub lang: &'static str,
    /// Locale for every localized date string on the page.
    pub locale: Locale,
    pub clock: ClockSettings,
    pub theme_storage_key: &'static str,
    pub nav_links: &'static [NavLink],
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Inicio",
            lang: "es",
            locale: Locale::es_ES,
            clock: ClockSettings::default(),
            theme_storage_key: THEME_STORAGE_KEY,
            nav_links: DEFAULT_NAV_LINKS,
        }
    }
}
