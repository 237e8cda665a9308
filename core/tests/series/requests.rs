// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use recurcal_core::{
    Config, MAX_OCCURRENCES, MonthlyShortMonthPolicy, RecurrenceError, RecurrenceRequest,
    RecurrenceRule,
};

use crate::common::{assert_dates, date};

fn parse(json: &str) -> RecurrenceRequest {
    serde_json::from_str(json).unwrap()
}

#[test]
fn json_request_generates() {
    let request = parse(
        r#"{ "anchorDate": "2025-01-31", "kind": "monthly", "maxOccurrences": 3 }"#,
    );
    let rule = RecurrenceRule::try_from(request).unwrap();
    assert_dates(
        &rule.generate(),
        &[date(2025, 1, 31), date(2025, 3, 31), date(2025, 5, 31)],
    );
}

#[test]
fn json_request_with_policy_override() {
    let request = parse(
        r#"{
            "anchorDate": "2025-01-31",
            "kind": "Monthly",
            "maxOccurrences": 2,
            "policies": { "monthlyShortMonthPolicy": "clamp-to-month-end" }
        }"#,
    );
    let rule = RecurrenceRule::try_from(request).unwrap();
    assert_dates(&rule.generate(), &[date(2025, 1, 31), date(2025, 2, 28)]);
}

#[test]
fn config_supplies_defaults() {
    let config = Config {
        monthly_short_month_policy: MonthlyShortMonthPolicy::ClampToMonthEnd,
        max_occurrences: Some(2),
        ..Default::default()
    };
    let request = parse(r#"{ "anchorDate": "2025-01-31", "kind": "monthly" }"#);
    let rule = request.resolve(&config).unwrap();
    assert_dates(&rule.generate(), &[date(2025, 1, 31), date(2025, 2, 28)]);
}

#[test]
fn invalid_requests_report_field() {
    let cases = [
        (
            r#"{ "anchorDate": "2025-01-01", "kind": "daily", "interval": 0 }"#,
            RecurrenceError::InvalidInterval { value: 0 },
        ),
        (
            r#"{ "anchorDate": "2025-01-01", "kind": "daily", "maxOccurrences": -1 }"#,
            RecurrenceError::InvalidMaxOccurrences { value: -1 },
        ),
        (
            r#"{ "anchorDate": "2025-02-30", "kind": "daily" }"#,
            RecurrenceError::InvalidDate {
                value: "2025-02-30".to_string(),
            },
        ),
        (
            r#"{ "anchorDate": "2025-01-01", "kind": "hourly" }"#,
            RecurrenceError::UnknownKind {
                value: "hourly".to_string(),
            },
        ),
    ];

    for (json, expected) in cases {
        let err = RecurrenceRule::try_from(parse(json)).unwrap_err();
        assert_eq!(err, expected, "{json}");
    }
}

#[test]
fn oversized_limits_saturate() {
    let request = parse(
        r#"{ "anchorDate": "2025-01-01", "kind": "daily", "maxOccurrences": 99999999999 }"#,
    );
    let rule = RecurrenceRule::try_from(request).unwrap();
    assert_eq!(rule.horizon().max_occurrences(), Some(u32::MAX));
    let occurrences = rule.generate();
    assert_eq!(occurrences.len(), MAX_OCCURRENCES);
    assert_eq!(occurrences[0].date, date(2025, 1, 1));

    // The second step already leaves the representable date range.
    let request = parse(
        r#"{ "anchorDate": "2025-01-01", "kind": "daily", "interval": 99999999999 }"#,
    );
    let rule = RecurrenceRule::try_from(request).unwrap();
    assert_eq!(rule.interval(), u32::MAX);
    assert_dates(&rule.generate(), &[date(2025, 1, 1)]);
}

#[test]
fn occurs_on_agrees_with_generation() {
    let request = parse(
        r#"{ "anchorDate": "2024-02-29", "kind": "yearly", "endDate": "2040-12-31" }"#,
    );
    let rule = RecurrenceRule::try_from(request).unwrap();

    for occurrence in rule.generate() {
        assert!(rule.occurs_on(occurrence.date));
    }
    assert!(!rule.occurs_on(date(2025, 2, 28)));
    assert!(rule.occurs_on(date(2036, 2, 29)));
    assert!(!rule.occurs_on(date(2044, 2, 29)));
}
