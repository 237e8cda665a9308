// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use recurcal_core::{MAX_OCCURRENCES, generate, generate_dates};

use crate::common::{RuleBuilder, assert_dates, date, dates_of};

#[test]
fn end_before_anchor_yields_anchor_only() {
    let rule = RuleBuilder::daily(date(2025, 6, 1))
        .until(date(2025, 5, 1))
        .build();
    assert_dates(&rule.generate(), &[date(2025, 6, 1)]);
}

#[test]
fn end_equal_to_anchor_yields_anchor_only() {
    let rule = RuleBuilder::weekly(date(2025, 6, 1))
        .until(date(2025, 6, 1))
        .build();
    assert_dates(&rule.generate(), &[date(2025, 6, 1)]);
}

#[test]
fn end_is_inclusive() {
    let rule = RuleBuilder::daily(date(2025, 1, 1))
        .until(date(2025, 1, 3))
        .build();
    assert_dates(
        &rule.generate(),
        &[date(2025, 1, 1), date(2025, 1, 2), date(2025, 1, 3)],
    );
}

#[test]
fn count_of_one_yields_anchor_only() {
    let rule = RuleBuilder::monthly(date(2025, 1, 31)).count(1).build();
    assert_dates(&rule.generate(), &[date(2025, 1, 31)]);
}

#[test]
fn earlier_of_end_and_count_wins() {
    let rule = RuleBuilder::daily(date(2025, 1, 1))
        .until(date(2025, 1, 5))
        .count(10)
        .build();
    assert_eq!(rule.generate().len(), 5);

    let rule = RuleBuilder::daily(date(2025, 1, 1))
        .until(date(2025, 1, 31))
        .count(3)
        .build();
    assert_eq!(rule.generate().len(), 3);
}

#[test]
fn unbounded_rule_is_capped() {
    let rule = RuleBuilder::daily(date(2025, 1, 1)).build();
    let occurrences = rule.generate();
    assert_eq!(occurrences.len(), MAX_OCCURRENCES);
    assert_eq!(occurrences[MAX_OCCURRENCES - 1].sequence_index, 999);
}

#[test]
fn requested_count_above_cap_is_capped() {
    let rule = RuleBuilder::weekly(date(2025, 1, 1)).count(5000).build();
    assert_eq!(rule.generate().len(), MAX_OCCURRENCES);
}

#[test]
fn generation_is_idempotent() {
    let rule = RuleBuilder::monthly(date(2025, 1, 31)).count(12).build();
    assert_eq!(rule.generate(), rule.generate());
    assert_eq!(generate(&rule), rule.generate());
    assert_eq!(generate_dates(&rule), dates_of(&rule.generate()));
}
