// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, NaiveTime};
use recurcal_core::{
    Horizon, MonthlyShortMonthPolicy, Occurrence, RecurrenceKind, RecurrencePolicies,
    RecurrenceRule, YearlyFeb29Policy,
};

/// Shorthand for a calendar date.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Shorthand for a time of day.
#[must_use]
pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// The dates of a generated sequence.
#[must_use]
pub fn dates_of(occurrences: &[Occurrence]) -> Vec<NaiveDate> {
    occurrences.iter().map(|a| a.date).collect()
}

/// Builder for test rules.
///
/// # Example
///
/// ```ignore
/// let rule = RuleBuilder::monthly(date(2025, 1, 31)).count(3).build();
/// ```
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    anchor: NaiveDate,
    kind: RecurrenceKind,
    interval: u32,
    end: Option<NaiveDate>,
    count: Option<u32>,
    policies: RecurrencePolicies,
}

impl RuleBuilder {
    #[must_use]
    pub fn new(anchor: NaiveDate, kind: RecurrenceKind) -> Self {
        Self {
            anchor,
            kind,
            interval: 1,
            end: None,
            count: None,
            policies: RecurrencePolicies::default(),
        }
    }

    #[must_use]
    pub fn daily(anchor: NaiveDate) -> Self {
        Self::new(anchor, RecurrenceKind::Daily)
    }

    #[must_use]
    pub fn weekly(anchor: NaiveDate) -> Self {
        Self::new(anchor, RecurrenceKind::Weekly)
    }

    #[must_use]
    pub fn monthly(anchor: NaiveDate) -> Self {
        Self::new(anchor, RecurrenceKind::Monthly)
    }

    #[must_use]
    pub fn yearly(anchor: NaiveDate) -> Self {
        Self::new(anchor, RecurrenceKind::Yearly)
    }

    #[must_use]
    pub fn every(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn monthly_policy(mut self, policy: MonthlyShortMonthPolicy) -> Self {
        self.policies = self.policies.with_monthly(policy);
        self
    }

    #[must_use]
    pub fn feb29_policy(mut self, policy: YearlyFeb29Policy) -> Self {
        self.policies = self.policies.with_yearly_feb29(policy);
        self
    }

    /// Builds the rule.
    ///
    /// # Panics
    ///
    /// Panics if the interval or count is zero.
    #[must_use]
    pub fn build(self) -> RecurrenceRule {
        let mut horizon = Horizon::unbounded();
        if let Some(end) = self.end {
            horizon = horizon.with_end(end);
        }
        if let Some(count) = self.count {
            horizon = horizon.with_max_occurrences(count).expect("positive count");
        }
        RecurrenceRule::new(self.anchor, self.kind, self.interval, horizon)
            .expect("valid rule")
            .with_policies(self.policies)
    }
}
