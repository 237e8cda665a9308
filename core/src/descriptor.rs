// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Occurrence, RecurrenceKind};

/// Presentation details for a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RecurrenceDescriptor {
    pub kind: RecurrenceKind,
    pub label: &'static str,
    /// Hex RGB, e.g. `#3B82F6`.
    pub color: &'static str,
}

impl RecurrenceDescriptor {
    /// The descriptor for `kind`.
    pub const fn of(kind: RecurrenceKind) -> Self {
        let (label, color) = match kind {
            RecurrenceKind::Daily => ("Repeats daily", "#10B981"),
            RecurrenceKind::Weekly => ("Repeats weekly", "#8B5CF6"),
            RecurrenceKind::Monthly => ("Repeats monthly", "#3B82F6"),
            RecurrenceKind::Yearly => ("Repeats yearly", "#F59E0B"),
        };
        RecurrenceDescriptor { kind, label, color }
    }

    /// The color as an `(r, g, b)` triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or_default();
        (channel(0), channel(2), channel(4))
    }
}

/// Whether, and how, to mark an occurrence as recurring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceIcon {
    /// Not part of a live series.
    Hidden,

    /// Part of a series of the described kind.
    Visible(RecurrenceDescriptor),
}

/// Looks up the icon for an occurrence from its series id prefix.
pub fn recurrence_icon(occurrence: &Occurrence) -> RecurrenceIcon {
    if !occurrence.is_recurring || occurrence.is_deleted {
        return RecurrenceIcon::Hidden;
    }

    match occurrence.series_id.kind() {
        Some(kind) => RecurrenceIcon::Visible(RecurrenceDescriptor::of(kind)),
        None => RecurrenceIcon::Hidden,
    }
}
