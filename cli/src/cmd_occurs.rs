// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use colored::{Color, Colorize};
use recurcal_core::{Config, Occurrence, RecurrenceIcon, recurrence_icon};

use crate::arg::{CommonArgs, RuleArgs};
use crate::util::{OutputFormat, date_arg};

#[derive(Debug, Clone, Copy)]
pub struct CmdOccurs {
    pub rule: RuleArgs,
    pub date: NaiveDate,
    pub output_format: OutputFormat,
}

impl CmdOccurs {
    pub const NAME: &str = "occurs";

    pub fn command() -> Command {
        // Positionals keep declaration order, so DATE follows ANCHOR.
        Command::new(Self::NAME)
            .about("Check whether a date is an occurrence of a recurrence rule")
            .args(RuleArgs::args())
            .arg(arg!(date: <DATE> "The date to check (YYYY-MM-DD)").value_parser(date_arg))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: RuleArgs::from(matches),
            date: *matches
                .get_one::<NaiveDate>("date")
                .expect("date is required"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking occurrence...");
        println!("{}", self.report(config)?);
        Ok(())
    }

    pub fn report(&self, config: &Config) -> Result<String, Box<dyn Error>> {
        let rule = self.rule.to_rule(config)?;
        let occurrence = match rule.occurs_on(self.date) {
            true => rule.occurrences_between(self.date, self.date).into_iter().next(),
            false => None,
        };

        Ok(match self.output_format {
            OutputFormat::Json => serde_json::to_string_pretty(&OccursReport {
                date: self.date,
                occurs: occurrence.is_some(),
                occurrence,
            })?,
            OutputFormat::Table => self.describe(occurrence.as_ref()),
        })
    }

    fn describe(&self, occurrence: Option<&Occurrence>) -> String {
        let date = self.date.format("%Y-%m-%d");
        let Some(occurrence) = occurrence else {
            return format!("{date} is not an occurrence");
        };

        let label = match recurrence_icon(occurrence) {
            RecurrenceIcon::Visible(descriptor) => {
                let (r, g, b) = descriptor.rgb();
                format!(" ({})", descriptor.label.color(Color::TrueColor { r, g, b }))
            }
            RecurrenceIcon::Hidden => String::new(),
        };
        format!(
            "{date} is occurrence #{} of {}{label}",
            occurrence.sequence_index, occurrence.series_id
        )
    }
}

#[derive(Debug, serde::Serialize)]
struct OccursReport {
    date: NaiveDate,
    occurs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    occurrence: Option<Occurrence>,
}
