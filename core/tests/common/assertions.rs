// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use chrono::NaiveDate;
use recurcal_core::{Occurrence, RecurrenceRule};

/// Asserts that the generated dates equal `expected`, in order.
///
/// # Panics
///
/// Panics on the first mismatch.
pub fn assert_dates(occurrences: &[Occurrence], expected: &[NaiveDate]) {
    let actual: Vec<_> = occurrences.iter().map(|a| a.date).collect();
    assert_eq!(actual, expected, "Generated dates mismatch");
}

/// Asserts that dates are strictly increasing.
///
/// # Panics
///
/// Panics if two neighbours are out of order or equal.
pub fn assert_ascending(occurrences: &[Occurrence]) {
    for pair in occurrences.windows(2) {
        assert!(
            pair[0].date < pair[1].date,
            "Dates not strictly ascending: {} then {}",
            pair[0].date,
            pair[1].date
        );
    }
}

/// Asserts the metadata every generated sequence must carry.
///
/// The first occurrence is the anchor, indices are contiguous from zero, every id is
/// unique, and all occurrences share the rule's series id.
///
/// # Panics
///
/// Panics if any of those properties fails.
pub fn assert_series_consistent(rule: &RecurrenceRule, occurrences: &[Occurrence]) {
    assert_eq!(
        occurrences.first().map(|a| a.date),
        Some(rule.anchor()),
        "First occurrence is not the anchor"
    );

    let series_id = rule.series_id();
    for (i, occurrence) in occurrences.iter().enumerate() {
        assert_eq!(occurrence.sequence_index, i, "Sequence index mismatch");
        assert_eq!(occurrence.series_id, series_id, "Series id mismatch");
        assert_eq!(occurrence.kind, rule.kind(), "Kind mismatch");
        assert!(occurrence.is_recurring, "Generated occurrence not recurring");
    }

    let mut ids: Vec<_> = occurrences.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), occurrences.len(), "Duplicate occurrence ids");
}
