// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDate;

use crate::RecurrenceKind;
use crate::datetime::STABLE_FORMAT_DATEONLY;
use crate::error::{RecurrenceError, Result};

const SERIES_MARKER: &str = "-series-";

/// Identifier shared by every occurrence generated from one rule.
///
/// Formatted as `{kind}-series-{anchor}`, e.g. `monthly-series-2025-01-15`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    /// Builds the series id for a rule of `kind` anchored at `anchor`.
    pub fn new(kind: RecurrenceKind, anchor: NaiveDate) -> Self {
        SeriesId(format!(
            "{kind}{SERIES_MARKER}{}",
            anchor.format(STABLE_FORMAT_DATEONLY)
        ))
    }

    /// The id of events that do not belong to any series.
    pub fn none() -> Self {
        SeriesId(String::new())
    }

    /// Whether this id names no series.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// The recurrence kind encoded in the prefix, if recognised.
    pub fn kind(&self) -> Option<RecurrenceKind> {
        let (prefix, _) = self.0.split_once(SERIES_MARKER)?;
        prefix.parse().ok()
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        SeriesId(value)
    }
}

/// One concrete date produced by a recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Stable identifier, `{kind}-{sequence_index}-{anchor}`.
    pub id: String,

    /// The calendar date of this occurrence.
    pub date: NaiveDate,

    /// The kind of rule that produced it.
    pub kind: RecurrenceKind,

    /// Zero-based position in the generated sequence.
    pub sequence_index: usize,

    /// Series shared with its siblings.
    pub series_id: SeriesId,

    /// Whether the occurrence is still part of its series.
    pub is_recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_modified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_deleted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<NaiveDate>,
}

impl Occurrence {
    pub(crate) fn generated(
        series_id: &SeriesId,
        kind: RecurrenceKind,
        anchor: NaiveDate,
        sequence_index: usize,
        date: NaiveDate,
    ) -> Self {
        Occurrence {
            id: format!(
                "{kind}-{sequence_index}-{}",
                anchor.format(STABLE_FORMAT_DATEONLY)
            ),
            date,
            kind,
            sequence_index,
            series_id: series_id.clone(),
            is_recurring: true,
            title: None,
            description: None,
            is_modified: false,
            modification_date: None,
            is_deleted: false,
            deletion_date: None,
        }
    }
}

/// Changes to overlay onto a single occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OccurrencePatch {
    /// New title.
    pub title: Option<String>,

    /// New description.
    pub description: Option<String>,

    /// Move the occurrence to another date.
    pub date: Option<NaiveDate>,

    /// Detach the occurrence from its series, or re-attach it.
    pub is_recurring: Option<bool>,
}

impl OccurrencePatch {
    fn apply_to(self, occurrence: &mut Occurrence) {
        if let Some(title) = self.title {
            occurrence.title = Some(title);
        }
        if let Some(description) = self.description {
            occurrence.description = Some(description);
        }
        if let Some(date) = self.date {
            occurrence.date = date;
        }
        if let Some(is_recurring) = self.is_recurring {
            occurrence.is_recurring = is_recurring;
        }
    }
}

/// Returns a modified copy of the occurrence at `index`.
///
/// The copy keeps its `series_id` for traceability and is stamped with `on` as its
/// modification date. The input slice is left untouched.
pub fn modify_occurrence(
    occurrences: &[Occurrence],
    index: usize,
    patch: OccurrencePatch,
    on: NaiveDate,
) -> Result<Occurrence> {
    let mut occurrence = get(occurrences, index)?.clone();
    patch.apply_to(&mut occurrence);
    occurrence.is_modified = true;
    occurrence.modification_date = Some(on);

    tracing::debug!(id = %occurrence.id, "occurrence modified");
    Ok(occurrence)
}

/// Returns a tombstoned copy of the occurrence at `index`.
///
/// Siblings in the series are unaffected; the input slice is left untouched.
pub fn delete_occurrence(
    occurrences: &[Occurrence],
    index: usize,
    on: NaiveDate,
) -> Result<Occurrence> {
    let mut occurrence = get(occurrences, index)?.clone();
    occurrence.is_deleted = true;
    occurrence.deletion_date = Some(on);

    tracing::debug!(id = %occurrence.id, "occurrence deleted");
    Ok(occurrence)
}

fn get(occurrences: &[Occurrence], index: usize) -> Result<&Occurrence> {
    occurrences
        .get(index)
        .ok_or(RecurrenceError::IndexOutOfRange {
            index,
            len: occurrences.len(),
        })
}
