// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use recurcal_core::{Occurrence, RecurrenceIcon, recurrence_icon};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct OccurrenceFormatter {
    columns: Vec<OccurrenceColumn>,
    format: OutputFormat,
}

impl OccurrenceFormatter {
    pub fn new(columns: Vec<OccurrenceColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, occurrences: &'a [Occurrence]) -> Display<'a> {
        Display {
            occurrences,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    occurrences: &'a [Occurrence],
    formatter: &'a OccurrenceFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(self.occurrences).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.occurrences)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceColumn {
    Index,
    Date,
    Weekday,
    Kind,
    Id,
    SeriesId,
}

impl OccurrenceColumn {
    pub fn basic() -> Vec<Self> {
        vec![Self::Index, Self::Date, Self::Weekday, Self::Kind]
    }

    pub fn verbose() -> Vec<Self> {
        vec![
            Self::Index,
            Self::Date,
            Self::Weekday,
            Self::Kind,
            Self::Id,
            Self::SeriesId,
        ]
    }
}

impl Column<Occurrence> for OccurrenceColumn {
    fn format(&self, data: &Occurrence) -> String {
        match self {
            Self::Index => format!("#{}", data.sequence_index),
            Self::Date => data.date.format("%Y-%m-%d").to_string(),
            Self::Weekday => data.date.format("%a").to_string(),
            Self::Kind => data.kind.to_string(),
            Self::Id => data.id.clone(),
            Self::SeriesId => data.series_id.to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Index => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &Occurrence) -> Option<Color> {
        match self {
            Self::Kind => match recurrence_icon(data) {
                RecurrenceIcon::Visible(descriptor) => {
                    let (r, g, b) = descriptor.rgb();
                    Some(Color::TrueColor { r, g, b })
                }
                RecurrenceIcon::Hidden => None,
            },
            _ => None,
        }
    }
}
