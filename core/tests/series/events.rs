// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use recurcal_core::{EventBatch, EventTemplate, delete_occurrence};

use crate::common::{RuleBuilder, date, time};

#[test]
fn monthly_template_expansion() {
    let rule = RuleBuilder::monthly(date(2025, 1, 31)).count(3).build();
    let mut template = EventTemplate::new("Pay rent", time(8, 0), time(8, 30)).unwrap();
    template.category = Some("finance".to_string());

    let batch = EventBatch::from(template.expand(&rule.generate()));
    let dates: Vec<_> = batch.events.iter().map(|a| a.date).collect();
    assert_eq!(dates, [date(2025, 1, 31), date(2025, 3, 31), date(2025, 5, 31)]);
    assert!(batch.events.iter().all(|a| a.is_recurring));
    assert!(
        batch
            .events
            .iter()
            .all(|a| a.category.as_deref() == Some("finance"))
    );
}

#[test]
fn deleted_occurrences_are_not_expanded() {
    let rule = RuleBuilder::daily(date(2025, 1, 1)).count(4).build();
    let mut occurrences = rule.generate();
    occurrences[3] = delete_occurrence(&occurrences, 3, date(2025, 1, 1)).unwrap();

    let template = EventTemplate::new("Gym", time(18, 0), time(19, 0)).unwrap();
    let events = template.expand(&occurrences);
    assert_eq!(events.len(), 3);
    assert_eq!(events.last().map(|a| a.date), Some(date(2025, 1, 3)));
}

#[test]
fn batch_json_shape() {
    let rule = RuleBuilder::weekly(date(2025, 1, 6)).count(2).build();
    let template = EventTemplate::new("Standup", time(9, 0), time(9, 15)).unwrap();
    let batch = EventBatch::from(template.expand(&rule.generate()));

    let value = serde_json::to_value(&batch).unwrap();
    let events = value["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["date"], "2025-01-13");
    assert_eq!(events[1]["startTime"], "09:00");
    assert_eq!(events[1]["isRecurring"], true);
    assert_eq!(events[1]["recurringSeriesId"], "weekly-series-2025-01-06");
}
