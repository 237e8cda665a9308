// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::error::RecurrenceError;

/// How often a rule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    /// Every `interval` days.
    Daily,

    /// Every `interval` weeks, on the anchor's weekday.
    Weekly,

    /// Every `interval` months, on the anchor's day of month.
    Monthly,

    /// Every `interval` years, on the anchor's month and day.
    Yearly,
}

impl RecurrenceKind {
    /// All kinds, in increasing step size.
    pub const ALL: [RecurrenceKind; 4] = [
        RecurrenceKind::Daily,
        RecurrenceKind::Weekly,
        RecurrenceKind::Monthly,
        RecurrenceKind::Yearly,
    ];

    /// Lowercase name, also used as the prefix of identifiers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Monthly => "monthly",
            RecurrenceKind::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceKind {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| RecurrenceError::UnknownKind {
                value: s.to_string(),
            })
    }
}

/// What a monthly rule anchored on the 31st does in months without a 31st.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MonthlyShortMonthPolicy {
    /// Leave the month out without counting it.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "skip"))]
    #[serde(rename = "skip")]
    Skip,

    /// Place the occurrence on the month's last day.
    #[cfg_attr(feature = "clap", clap(name = "clamp-to-month-end", alias = "adjust-to-end"))]
    #[serde(rename = "clamp-to-month-end", alias = "adjust-to-end")]
    ClampToMonthEnd,
}

impl MonthlyShortMonthPolicy {
    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MonthlyShortMonthPolicy::Skip => "skip",
            MonthlyShortMonthPolicy::ClampToMonthEnd => "clamp-to-month-end",
        }
    }
}

impl fmt::Display for MonthlyShortMonthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonthlyShortMonthPolicy {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MonthlyShortMonthPolicy::Skip),
            "clamp-to-month-end" | "adjust-to-end" => Ok(MonthlyShortMonthPolicy::ClampToMonthEnd),
            _ => Err(RecurrenceError::UnknownPolicy {
                policy: "monthly short-month",
                value: s.to_string(),
            }),
        }
    }
}

/// What a yearly rule anchored on February 29 does in other years.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum YearlyFeb29Policy {
    /// Only leap years produce an occurrence.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "leap-only"))]
    #[serde(rename = "leap-only")]
    LeapOnly,

    /// Only years divisible by 400 produce an occurrence.
    #[cfg_attr(feature = "clap", clap(name = "leap-400-only"))]
    #[serde(rename = "leap-400-only")]
    Leap400Only,

    /// Every year produces an occurrence, on February 28 in common years.
    #[cfg_attr(feature = "clap", clap(name = "clamp-to-feb-28", alias = "clip"))]
    #[serde(rename = "clamp-to-feb-28", alias = "clip")]
    ClampToFeb28,
}

impl YearlyFeb29Policy {
    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            YearlyFeb29Policy::LeapOnly => "leap-only",
            YearlyFeb29Policy::Leap400Only => "leap-400-only",
            YearlyFeb29Policy::ClampToFeb28 => "clamp-to-feb-28",
        }
    }
}

impl fmt::Display for YearlyFeb29Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YearlyFeb29Policy {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leap-only" => Ok(YearlyFeb29Policy::LeapOnly),
            "leap-400-only" => Ok(YearlyFeb29Policy::Leap400Only),
            "clamp-to-feb-28" | "clip" => Ok(YearlyFeb29Policy::ClampToFeb28),
            _ => Err(RecurrenceError::UnknownPolicy {
                policy: "yearly Feb 29",
                value: s.to_string(),
            }),
        }
    }
}

/// Resolution policies for dates missing from some periods.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecurrencePolicies {
    /// Monthly rules anchored on the 31st.
    #[serde(default)]
    pub monthly: MonthlyShortMonthPolicy,

    /// Yearly rules anchored on February 29.
    #[serde(default)]
    pub yearly_feb29: YearlyFeb29Policy,
}

impl RecurrencePolicies {
    /// Replaces the monthly policy.
    pub fn with_monthly(mut self, policy: MonthlyShortMonthPolicy) -> Self {
        self.monthly = policy;
        self
    }

    /// Replaces the yearly February 29 policy.
    pub fn with_yearly_feb29(mut self, policy: YearlyFeb29Policy) -> Self {
        self.yearly_feb29 = policy;
        self
    }
}
