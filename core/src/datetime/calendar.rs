// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month (1-based).
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month must be in 1..=12"),
    }
}

/// Whether the date is the last day of its month.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

/// A (year, month) position used to walk across month boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year of the cursor.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the cursor, 1-based.
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Moves the cursor by `months`, carrying overflow into the year.
    ///
    /// Returns `None` when the resulting year does not fit in an `i32`.
    pub fn advance(self, months: i64) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1);
        let index = index.checked_add(months)?;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        Some(Self { year, month })
    }

    /// Number of days in the month under the cursor.
    pub const fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The given day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// The last day of this month.
    ///
    /// Returns `None` only when the year is outside chrono's supported range.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.day(self.days())
    }
}
