// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use recurcal_core::YearlyFeb29Policy;

use crate::common::{RuleBuilder, assert_ascending, assert_dates, assert_series_consistent, date};

#[test]
fn plain_date_every_other_year() {
    let rule = RuleBuilder::yearly(date(2025, 3, 15)).every(2).count(3).build();
    assert_dates(
        &rule.generate(),
        &[date(2025, 3, 15), date(2027, 3, 15), date(2029, 3, 15)],
    );
}

#[test]
fn leap_only_skips_common_years() {
    let rule = RuleBuilder::yearly(date(2024, 2, 29)).count(2).build();
    let occurrences = rule.generate();

    assert_dates(&occurrences, &[date(2024, 2, 29), date(2028, 2, 29)]);
    assert_series_consistent(&rule, &occurrences);
}

#[test]
fn leap_only_until_end() {
    let rule = RuleBuilder::yearly(date(2024, 2, 29))
        .feb29_policy(YearlyFeb29Policy::LeapOnly)
        .until(date(2032, 12, 31))
        .build();
    assert_dates(
        &rule.generate(),
        &[date(2024, 2, 29), date(2028, 2, 29), date(2032, 2, 29)],
    );
}

#[test]
fn leap_only_skips_century_years() {
    let rule = RuleBuilder::yearly(date(2096, 2, 29)).count(2).build();
    assert_dates(&rule.generate(), &[date(2096, 2, 29), date(2104, 2, 29)]);
}

#[test]
fn leap_only_with_interval() {
    let rule = RuleBuilder::yearly(date(2024, 2, 29)).every(2).count(3).build();
    assert_dates(
        &rule.generate(),
        &[date(2024, 2, 29), date(2028, 2, 29), date(2032, 2, 29)],
    );
}

#[test]
fn leap_400_only() {
    let rule = RuleBuilder::yearly(date(2000, 2, 29))
        .feb29_policy(YearlyFeb29Policy::Leap400Only)
        .count(2)
        .build();
    assert_dates(&rule.generate(), &[date(2000, 2, 29), date(2400, 2, 29)]);
}

#[test]
fn leap_400_only_keeps_anchor() {
    let rule = RuleBuilder::yearly(date(2024, 2, 29))
        .feb29_policy(YearlyFeb29Policy::Leap400Only)
        .count(2)
        .build();
    assert_dates(&rule.generate(), &[date(2024, 2, 29), date(2400, 2, 29)]);
}

#[test]
fn clamp_to_feb_28() {
    let rule = RuleBuilder::yearly(date(2024, 2, 29))
        .feb29_policy(YearlyFeb29Policy::ClampToFeb28)
        .count(5)
        .build();
    let occurrences = rule.generate();

    assert_dates(
        &occurrences,
        &[
            date(2024, 2, 29),
            date(2025, 2, 28),
            date(2026, 2, 28),
            date(2027, 2, 28),
            date(2028, 2, 29),
        ],
    );
    assert_ascending(&occurrences);
}
