// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::datetime::{RangePosition, parse_date};
use crate::error::{RecurrenceError, Result};
use crate::generator;
use crate::{Config, Occurrence, RecurrenceKind, RecurrencePolicies, SeriesId};

/// When generation stops: an inclusive end date, an occurrence cap, or both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    end: Option<NaiveDate>,
    max_occurrences: Option<NonZeroU32>,
}

impl Horizon {
    /// No caller-supplied limit; only the generator's hard cap applies.
    pub const fn unbounded() -> Self {
        Horizon {
            end: None,
            max_occurrences: None,
        }
    }

    /// Stops after `end`, inclusive.
    pub const fn until(end: NaiveDate) -> Self {
        Horizon {
            end: Some(end),
            max_occurrences: None,
        }
    }

    /// Stops after `max` occurrences.
    pub fn count(max: u32) -> Result<Self> {
        Horizon::unbounded().with_max_occurrences(max)
    }

    /// Sets the inclusive end date.
    pub const fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the occurrence cap, which must be positive.
    pub fn with_max_occurrences(mut self, max: u32) -> Result<Self> {
        let max = NonZeroU32::new(max).ok_or(RecurrenceError::InvalidMaxOccurrences { value: 0 })?;
        self.max_occurrences = Some(max);
        Ok(self)
    }

    /// The inclusive end date, if any.
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// The occurrence cap, if any.
    pub fn max_occurrences(&self) -> Option<u32> {
        self.max_occurrences.map(NonZeroU32::get)
    }
}

/// A validated recurrence rule.
///
/// Rules are immutable; build one per generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    anchor: NaiveDate,
    kind: RecurrenceKind,
    interval: NonZeroU32,
    horizon: Horizon,
    policies: RecurrencePolicies,
}

impl RecurrenceRule {
    /// Creates a rule with default policies.
    pub fn new(
        anchor: NaiveDate,
        kind: RecurrenceKind,
        interval: u32,
        horizon: Horizon,
    ) -> Result<Self> {
        let interval = NonZeroU32::new(interval).ok_or(RecurrenceError::InvalidInterval { value: 0 })?;
        Ok(RecurrenceRule {
            anchor,
            kind,
            interval,
            horizon,
            policies: RecurrencePolicies::default(),
        })
    }

    /// Replaces the resolution policies.
    pub fn with_policies(mut self, policies: RecurrencePolicies) -> Self {
        self.policies = policies;
        self
    }

    /// The first occurrence.
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub const fn kind(&self) -> RecurrenceKind {
        self.kind
    }

    pub const fn interval(&self) -> u32 {
        self.interval.get()
    }

    pub const fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    pub const fn policies(&self) -> &RecurrencePolicies {
        &self.policies
    }

    /// The id shared by all occurrences of this rule.
    pub fn series_id(&self) -> SeriesId {
        SeriesId::new(self.kind, self.anchor)
    }

    /// Expands the rule into its occurrences.
    pub fn generate(&self) -> Vec<Occurrence> {
        generator::generate(self)
    }

    /// Whether `date` is one of the generated occurrence dates.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match RangePosition::of(date, self.anchor, self.horizon.end) {
            RangePosition::InRange => generator::generate_dates(self).binary_search(&date).is_ok(),
            RangePosition::Before | RangePosition::After => false,
            // End precedes the anchor, so only the anchor itself occurs.
            RangePosition::InvalidRange => date == self.anchor,
        }
    }

    /// Generated occurrences dated within `[from, to]`.
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Occurrence> {
        if from > to {
            return Vec::new();
        }

        self.generate()
            .into_iter()
            .filter(|a| RangePosition::of(a.date, from, Some(to)) == RangePosition::InRange)
            .collect()
    }
}

/// The string-typed form of a rule, as received from forms or JSON payloads.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    /// First occurrence, `YYYY-MM-DD`.
    pub anchor_date: String,

    /// One of `daily`, `weekly`, `monthly`, `yearly`.
    pub kind: String,

    /// Units between occurrences; defaults to the configured interval.
    #[serde(default)]
    pub interval: Option<i64>,

    /// Inclusive end date, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,

    /// Occurrence cap.
    #[serde(default)]
    pub max_occurrences: Option<i64>,

    #[serde(default)]
    pub policies: Option<PolicyRequest>,
}

/// Policy names as received on the wire.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequest {
    #[serde(default, alias = "monthly31Policy")]
    pub monthly_short_month_policy: Option<String>,

    #[serde(default)]
    pub yearly_feb29_policy: Option<String>,
}

impl RecurrenceRequest {
    /// Validates the request, filling unspecified fields from `config`.
    pub fn resolve(&self, config: &Config) -> Result<RecurrenceRule> {
        let anchor = parse_date(&self.anchor_date)?;
        let kind = self.kind.parse::<RecurrenceKind>()?;

        let interval = match self.interval {
            Some(value) => {
                positive_u32(value).ok_or(RecurrenceError::InvalidInterval { value })?
            }
            None => config.default_interval,
        };

        let mut horizon = Horizon::unbounded();
        if let Some(end) = &self.end_date {
            horizon = horizon.with_end(parse_date(end)?);
        }
        match self.max_occurrences {
            Some(value) => {
                let max = positive_u32(value)
                    .ok_or(RecurrenceError::InvalidMaxOccurrences { value })?;
                horizon = horizon.with_max_occurrences(max)?;
            }
            None => {
                if let Some(max) = config.max_occurrences {
                    horizon = horizon.with_max_occurrences(max)?;
                }
            }
        }

        let mut policies = config.policies();
        if let Some(requested) = &self.policies {
            if let Some(monthly) = &requested.monthly_short_month_policy {
                policies.monthly = monthly.parse()?;
            }
            if let Some(yearly) = &requested.yearly_feb29_policy {
                policies.yearly_feb29 = yearly.parse()?;
            }
        }

        Ok(RecurrenceRule::new(anchor, kind, interval, horizon)?.with_policies(policies))
    }
}

/// Positive values saturate at `u32::MAX`, beyond any reachable step or cap.
fn positive_u32(value: i64) -> Option<u32> {
    (value > 0).then(|| u32::try_from(value).unwrap_or(u32::MAX))
}

impl TryFrom<&RecurrenceRequest> for RecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(request: &RecurrenceRequest) -> Result<Self> {
        request.resolve(&Config::default())
    }
}

impl TryFrom<RecurrenceRequest> for RecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(request: RecurrenceRequest) -> Result<Self> {
        RecurrenceRule::try_from(&request)
    }
}
