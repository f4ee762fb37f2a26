//! Localized date strings for the clock and calendar.

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

use std::fmt::Display;

use chrono::{DateTime, Duration, Locale, TimeZone, Utc};

use crate::settings::ClockSettings;

/// Clock text: `<long date> - <time>`.
pub fn clock_text<Tz>(now: &DateTime<Tz>, locale: Locale, clock: &ClockSettings) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = now.format_localized(clock.date_format, locale);
    let time = now.format_localized(clock.time_format, locale);
    format!("{date} - {time}")
}

/// Abbreviated weekday names, Sunday first.
pub fn weekday_headers(locale: Locale) -> Vec<String> {
    // 2023-01-01 fell on a Sunday.
    let Some(sunday) = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single() else {
        return Vec::new();
    };
    (0..7)
        .map(|offset| (sunday + Duration::days(offset)).format_localized("%a", locale).to_string())
        .collect()
}

/// Month and year caption, e.g. `febrero 2024`.
pub fn month_caption(year: i32, month: u32, locale: Locale) -> Option<String> {
    let first = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
    Some(first.format_localized("%B %Y", locale).to_string())
}
