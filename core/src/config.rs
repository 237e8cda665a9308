// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{RecurrenceError, Result};
use crate::{MonthlyShortMonthPolicy, RecurrencePolicies, YearlyFeb29Policy};

/// The name of the application.
pub const APP_NAME: &str = "recurcal";

/// Defaults applied to requests that leave a field unspecified.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// How a monthly rule anchored on the 31st treats shorter months.
    #[serde(default)]
    pub monthly_short_month_policy: MonthlyShortMonthPolicy,

    /// How a yearly rule anchored on Feb 29 treats non-leap years.
    #[serde(default)]
    pub yearly_feb29_policy: YearlyFeb29Policy,

    /// Occurrence cap for requests that set none.
    #[serde(default)]
    pub max_occurrences: Option<u32>,

    /// Interval for requests that set none.
    #[serde(default = "default_interval")]
    pub default_interval: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            monthly_short_month_policy: MonthlyShortMonthPolicy::default(),
            yearly_feb29_policy: YearlyFeb29Policy::default(),
            max_occurrences: None,
            default_interval: default_interval(),
        }
    }
}

impl Config {
    /// Rejects non-positive limits.
    pub fn validate(&self) -> Result<()> {
        if self.default_interval == 0 {
            return Err(RecurrenceError::InvalidInterval { value: 0 });
        }
        if self.max_occurrences == Some(0) {
            return Err(RecurrenceError::InvalidMaxOccurrences { value: 0 });
        }
        Ok(())
    }

    /// The configured policies as a bundle.
    pub const fn policies(&self) -> RecurrencePolicies {
        RecurrencePolicies {
            monthly: self.monthly_short_month_policy,
            yearly_feb29: self.yearly_feb29_policy,
        }
    }
}

const fn default_interval() -> u32 {
    1
}
