// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expansion of a recurrence rule into concrete dates.
//!
//! Every candidate is computed from the anchor directly (step `k` is the anchor plus
//! `k * interval` units), so month-end resolution in one step never leaks into the next.

use chrono::{Datelike, Days, NaiveDate};

use crate::datetime::{MonthCursor, is_last_day_of_month, is_leap_year};
use crate::{
    MonthlyShortMonthPolicy, Occurrence, RecurrenceKind, RecurrenceRule, YearlyFeb29Policy,
};

/// Upper bound on generated occurrences, whatever the horizon says.
pub const MAX_OCCURRENCES: usize = 1000;

/// Upper bound on candidate steps, counting skipped ones.
pub const MAX_STEPS: u32 = 100_000;

/// Expands `rule` into its occurrences, anchor first, in ascending date order.
pub fn generate(rule: &RecurrenceRule) -> Vec<Occurrence> {
    let series_id = rule.series_id();
    generate_dates(rule)
        .into_iter()
        .enumerate()
        .map(|(i, date)| Occurrence::generated(&series_id, rule.kind(), rule.anchor(), i, date))
        .collect()
}

/// Expands `rule` into the bare list of occurrence dates.
pub fn generate_dates(rule: &RecurrenceRule) -> Vec<NaiveDate> {
    let limit = rule
        .horizon()
        .max_occurrences()
        .map_or(MAX_OCCURRENCES, |max| {
            usize::try_from(max).map_or(MAX_OCCURRENCES, |max| max.min(MAX_OCCURRENCES))
        });

    let stepper = Stepper::new(rule);
    let mut dates = vec![rule.anchor()];
    let mut skipped = 0_u32;
    for step in 1..=MAX_STEPS {
        if dates.len() >= limit {
            break;
        }

        match stepper.candidate(step) {
            Candidate::Emit(date) => {
                if rule.horizon().end().is_some_and(|end| date > end) {
                    break;
                }
                dates.push(date);
            }
            Candidate::Skip => skipped += 1,
            Candidate::Exhausted => break,
        }
    }

    tracing::debug!(
        kind = %rule.kind(),
        interval = rule.interval(),
        anchor = %rule.anchor(),
        emitted = dates.len(),
        skipped,
        "recurrence expanded"
    );
    dates
}

/// Outcome of one stepping attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    /// A valid occurrence date.
    Emit(NaiveDate),

    /// This period has no occurrence under the active policy.
    Skip,

    /// The date left the representable range.
    Exhausted,
}

impl From<Option<NaiveDate>> for Candidate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Candidate::Exhausted, Candidate::Emit)
    }
}

/// Which day a monthly rule lands on in each target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthDay {
    /// The anchor's day, or the month's last day when the month is shorter.
    Fixed(u32),

    /// The last day of every month.
    EndOfMonth,

    /// The 31st, resolved by policy in shorter months.
    ThirtyFirst(MonthlyShortMonthPolicy),
}

impl MonthDay {
    fn of(anchor: NaiveDate, policy: MonthlyShortMonthPolicy) -> Self {
        if anchor.day() == 31 {
            MonthDay::ThirtyFirst(policy)
        } else if is_last_day_of_month(anchor) {
            MonthDay::EndOfMonth
        } else {
            MonthDay::Fixed(anchor.day())
        }
    }

    fn resolve(self, cursor: MonthCursor) -> Candidate {
        match self {
            MonthDay::Fixed(day) => cursor.day(day.min(cursor.days())).into(),
            MonthDay::EndOfMonth => cursor.last_day().into(),
            MonthDay::ThirtyFirst(MonthlyShortMonthPolicy::Skip) if cursor.days() < 31 => {
                Candidate::Skip
            }
            MonthDay::ThirtyFirst(_) => cursor.last_day().into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Stepper {
    anchor: NaiveDate,
    kind: RecurrenceKind,
    interval: i64,
    month_day: MonthDay,
    feb29: Option<YearlyFeb29Policy>,
}

impl Stepper {
    fn new(rule: &RecurrenceRule) -> Self {
        let anchor = rule.anchor();
        let policies = rule.policies();
        Stepper {
            anchor,
            kind: rule.kind(),
            interval: i64::from(rule.interval()),
            month_day: MonthDay::of(anchor, policies.monthly),
            feb29: (anchor.month() == 2 && anchor.day() == 29).then_some(policies.yearly_feb29),
        }
    }

    fn candidate(&self, step: u32) -> Candidate {
        let Some(units) = i64::from(step).checked_mul(self.interval) else {
            return Candidate::Exhausted;
        };

        match self.kind {
            RecurrenceKind::Daily => self.offset_days(units),
            RecurrenceKind::Weekly => match units.checked_mul(7) {
                Some(days) => self.offset_days(days),
                None => Candidate::Exhausted,
            },
            RecurrenceKind::Monthly => match MonthCursor::of(self.anchor).advance(units) {
                Some(cursor) => self.month_day.resolve(cursor),
                None => Candidate::Exhausted,
            },
            RecurrenceKind::Yearly => {
                let year = i64::from(self.anchor.year())
                    .checked_add(units)
                    .and_then(|a| i32::try_from(a).ok());
                match year {
                    Some(year) => self.in_year(year),
                    None => Candidate::Exhausted,
                }
            }
        }
    }

    fn offset_days(&self, days: i64) -> Candidate {
        u64::try_from(days)
            .ok()
            .and_then(|days| self.anchor.checked_add_days(Days::new(days)))
            .into()
    }

    fn in_year(&self, year: i32) -> Candidate {
        let Some(policy) = self.feb29 else {
            return NaiveDate::from_ymd_opt(year, self.anchor.month(), self.anchor.day()).into();
        };

        match policy {
            YearlyFeb29Policy::LeapOnly if !is_leap_year(year) => Candidate::Skip,
            YearlyFeb29Policy::Leap400Only if year.rem_euclid(400) != 0 => Candidate::Skip,
            YearlyFeb29Policy::ClampToFeb28 if !is_leap_year(year) => {
                NaiveDate::from_ymd_opt(year, 2, 28).into()
            }
            _ => NaiveDate::from_ymd_opt(year, 2, 29).into(),
        }
    }
}
