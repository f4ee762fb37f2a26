//! Sunday-first day grid for a single month.
//!
//! DESIGN
//! ======
//! A grid is derived from `(year, month)` alone and recomputed on every
//! render. Row emission keeps the first row unconditionally, keeps later rows
//! only while they hold at least one day, and stops once every day is placed.
//! Months are never padded to a fixed six-row layout.

#[cfg(test)]
#[path = "month_grid_test.rs"]
mod month_grid_test;

use chrono::{Datelike, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_WEEKS: usize = 6;

/// One table cell: padding or a day of the month.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayCell {
    #[default]
    Blank,
    Day(u32),
}

impl DayCell {
    pub fn day(self) -> Option<u32> {
        match self {
            Self::Blank => None,
            Self::Day(day) => Some(day),
        }
    }
}

pub type Week = [DayCell; DAYS_PER_WEEK];

/// Layout facts for one month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    offset: u32,
    days: u32,
}

impl MonthGrid {
    /// Returns `None` when `month` is outside `1..=12` or the year is out of
    /// chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 { (year.checked_add(1)?, 1) } else { (year, month + 1) };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
        Some(Self { year, month, offset: first.weekday().num_days_from_sunday(), days: last.day() })
    }

    pub fn for_date(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    pub fn weeks(&self) -> Vec<Week> {
        let mut weeks = Vec::with_capacity(MAX_WEEKS);
        let mut next_day = 1;

        for row in 0..MAX_WEEKS {
            let mut week = [DayCell::Blank; DAYS_PER_WEEK];
            let mut has_days = false;

            for (col, cell) in (0u32..).zip(week.iter_mut()) {
                if row == 0 && col < self.offset {
                    continue;
                }
                if next_day <= self.days {
                    *cell = DayCell::Day(next_day);
                    next_day += 1;
                    has_days = true;
                }
            }

            if has_days || row == 0 {
                weeks.push(week);
            }
            if next_day > self.days && has_days {
                break;
            }
        }

        weeks
    }
}
