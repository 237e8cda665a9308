// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurring-event date generation.
//!
//! A [`RecurrenceRule`] expands into an ordered list of [`Occurrence`]s, which can be
//! overlaid with edits or tombstones and decorated into events through an
//! [`EventTemplate`].

mod config;
mod descriptor;
mod error;
mod event;
mod occurrence;
mod rule;
mod types;

pub mod datetime;
pub mod generator;

pub use crate::config::{APP_NAME, Config};
pub use crate::descriptor::{RecurrenceDescriptor, RecurrenceIcon, recurrence_icon};
pub use crate::error::{RecurrenceError, Result};
pub use crate::event::{EventBatch, EventTemplate, RecurringEvent};
pub use crate::generator::{MAX_OCCURRENCES, generate, generate_dates};
pub use crate::occurrence::{
    Occurrence, OccurrencePatch, SeriesId, delete_occurrence, modify_occurrence,
};
pub use crate::rule::{Horizon, PolicyRequest, RecurrenceRequest, RecurrenceRule};
pub use crate::types::{
    MonthlyShortMonthPolicy, RecurrenceKind, RecurrencePolicies, YearlyFeb29Policy,
};
