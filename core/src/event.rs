// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};

use crate::datetime::{STABLE_FORMAT_DATEONLY, STABLE_FORMAT_TIME};
use crate::error::{RecurrenceError, Result};
use crate::{Occurrence, SeriesId};

/// Shared fields attached to every event of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTemplate {
    title: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    /// Minutes before the start to notify.
    pub notification_minutes: Option<u32>,
}

impl EventTemplate {
    /// Creates a template; the title must be non-empty and the start before the end.
    pub fn new(title: impl Into<String>, start_time: NaiveTime, end_time: NaiveTime) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RecurrenceError::EmptyTitle);
        }
        if start_time >= end_time {
            return Err(RecurrenceError::InvalidTimeRange {
                start: start_time.format(STABLE_FORMAT_TIME).to_string(),
                end: end_time.format(STABLE_FORMAT_TIME).to_string(),
            });
        }

        Ok(EventTemplate {
            title,
            start_time,
            end_time,
            description: None,
            location: None,
            category: None,
            notification_minutes: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub const fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Decorates each occurrence with the template's fields.
    ///
    /// Per-occurrence title and description overlays win over the template's.
    pub fn expand(&self, occurrences: &[Occurrence]) -> Vec<RecurringEvent> {
        occurrences
            .iter()
            .filter(|a| !a.is_deleted)
            .map(|occurrence| RecurringEvent {
                id: occurrence.id.clone(),
                date: occurrence.date,
                title: occurrence.title.clone().unwrap_or_else(|| self.title.clone()),
                description: occurrence.description.clone().or_else(|| self.description.clone()),
                start_time: self.start_time,
                end_time: self.end_time,
                location: self.location.clone(),
                category: self.category.clone(),
                notification_minutes: self.notification_minutes,
                is_recurring: occurrence.is_recurring,
                series_id: occurrence.series_id.clone(),
            })
            .collect()
    }

    /// A stand-alone, non-recurring event on `date`.
    pub fn single(&self, date: NaiveDate) -> RecurringEvent {
        RecurringEvent {
            id: format!("single-{}", date.format(STABLE_FORMAT_DATEONLY)),
            date,
            title: self.title.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            notification_minutes: self.notification_minutes,
            is_recurring: false,
            series_id: SeriesId::none(),
        }
    }
}

/// A fully decorated event record, ready for bulk creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_minutes: Option<u32>,
    pub is_recurring: bool,
    #[serde(rename = "recurringSeriesId")]
    pub series_id: SeriesId,
}

/// The bulk-create payload, `{ "events": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventBatch {
    pub events: Vec<RecurringEvent>,
}

impl From<Vec<RecurringEvent>> for EventBatch {
    fn from(events: Vec<RecurringEvent>) -> Self {
        EventBatch { events }
    }
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::datetime::STABLE_FORMAT_TIME;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(STABLE_FORMAT_TIME))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, STABLE_FORMAT_TIME).map_err(de::Error::custom)
    }
}
