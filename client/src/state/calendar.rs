#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, NaiveDate};

use crate::util::month_grid::{MonthGrid, Week};

/// Rendered month: the grid rows plus which day is today.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub today: u32,
    pub days_in_month: u32,
    pub weeks: Vec<Week>,
}

/// Calendar widget state.
///
/// `generate` rebuilds the whole view and drops the selection; at most one
/// day is selected at any time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarState {
    pub view: Option<MonthView>,
    pub selected: Option<u32>,
}

impl CalendarState {
    pub fn generate(&mut self, today: NaiveDate) {
        self.view = MonthGrid::for_date(today).map(|grid| MonthView {
            year: grid.year(),
            month: grid.month(),
            today: today.day(),
            days_in_month: grid.days_in_month(),
            weeks: grid.weeks(),
        });
        self.selected = None;
    }

    /// Select `day`, replacing any previous selection.
    ///
    /// Returns `false` (and leaves the selection untouched) when `day` is not
    /// a day of the rendered month.
    pub fn select(&mut self, day: u32) -> bool {
        if !self.contains(day) {
            return false;
        }
        self.selected = Some(day);
        true
    }

    pub fn is_today(&self, day: u32) -> bool {
        self.view.as_ref().is_some_and(|view| view.today == day)
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected == Some(day)
    }

    fn contains(&self, day: u32) -> bool {
        self.view.as_ref().is_some_and(|view| (1..=view.days_in_month).contains(&day))
    }
}
