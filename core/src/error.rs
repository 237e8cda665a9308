// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while building recurrence rules or editing generated occurrences.
///
/// Every variant describes a caller-input problem; nothing here is transient.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecurrenceError {
    /// The interval between occurrences must be at least one unit.
    #[error("Interval must be a positive integer, got {value}")]
    InvalidInterval {
        /// The rejected interval.
        value: i64,
    },

    /// The occurrence cap must be at least one.
    #[error("Maximum occurrences must be a positive integer, got {value}")]
    InvalidMaxOccurrences {
        /// The rejected cap.
        value: i64,
    },

    /// A date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A time string is not a valid `HH:MM` time.
    #[error("Invalid time '{value}', expected HH:MM")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// Unknown recurrence kind name.
    #[error("Unknown recurrence kind '{value}', expected one of: daily, weekly, monthly, yearly")]
    UnknownKind {
        /// The rejected input.
        value: String,
    },

    /// Unknown policy name.
    #[error("Unknown {policy} policy '{value}'")]
    UnknownPolicy {
        /// Which policy was being parsed.
        policy: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The occurrence index is outside the generated sequence.
    #[error("Occurrence index {index} is out of range for a sequence of {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// An event template whose start time is not before its end time.
    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange {
        /// Requested start time.
        start: String,
        /// Requested end time.
        end: String,
    },

    /// An event template without a title.
    #[error("Event title must not be empty")]
    EmptyTitle,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RecurrenceError>;
