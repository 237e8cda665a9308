// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};

use crate::error::{RecurrenceError, Result};

/// NOTE: Used on the wire, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_TIME: &str = "%H:%M";

/// The position of a date relative to a range defined by a start and optional end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    /// The date is before the start of the range.
    Before,

    /// The date is within the range, bounds included.
    InRange,

    /// The date is after the end of the range.
    After,

    /// The range is invalid, e.g., start date is after end date.
    InvalidRange,
}

impl RangePosition {
    /// Locates `date` against `[start, end]`; a missing end leaves the range open.
    pub fn of(date: NaiveDate, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        match end {
            Some(end) if start > end => RangePosition::InvalidRange,
            _ if date < start => RangePosition::Before,
            Some(end) if date > end => RangePosition::After,
            _ => RangePosition::InRange,
        }
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Chrono alone accepts unpadded fields such as `2025-1-5`, which the wire format forbids.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return Err(RecurrenceError::InvalidDate {
            value: s.to_string(),
        });
    }

    NaiveDate::parse_from_str(s, STABLE_FORMAT_DATEONLY).map_err(|_| RecurrenceError::InvalidDate {
        value: s.to_string(),
    })
}

/// Parses an `HH:MM` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), STABLE_FORMAT_TIME).map_err(|_| RecurrenceError::InvalidTime {
        value: s.to_string(),
    })
}
