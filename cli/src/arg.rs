// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};
use clap::{Arg, ArgMatches, arg, value_parser};
use recurcal_core::{
    Config, EventTemplate, Horizon, MonthlyShortMonthPolicy, RecurrenceError, RecurrenceKind,
    RecurrenceRule, YearlyFeb29Policy,
};

use crate::util::{OutputFormat, date_arg, time_arg};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// The arguments describing a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleArgs {
    pub anchor: NaiveDate,
    pub kind: RecurrenceKind,
    pub interval: Option<u32>,
    pub until: Option<NaiveDate>,
    pub count: Option<u32>,
    pub monthly_policy: Option<MonthlyShortMonthPolicy>,
    pub feb29_policy: Option<YearlyFeb29Policy>,
}

impl RuleArgs {
    pub fn args() -> [Arg; 7] {
        [
            arg!(anchor: <ANCHOR> "Date of the first occurrence (YYYY-MM-DD)")
                .value_parser(date_arg),
            arg!(-k --kind <KIND> "How often the rule repeats")
                .value_parser(value_parser!(RecurrenceKind))
                .default_value("daily"),
            arg!(-i --interval <N> "Units between occurrences")
                .value_parser(value_parser!(u32)),
            arg!(--until <DATE> "Last possible occurrence date, inclusive (YYYY-MM-DD)")
                .value_parser(date_arg),
            arg!(-n --count <N> "Maximum number of occurrences")
                .value_parser(value_parser!(u32)),
            arg!(--"monthly-policy" <POLICY> "Monthly rules on the 31st: what to do in shorter months")
                .value_parser(value_parser!(MonthlyShortMonthPolicy)),
            arg!(--"feb29-policy" <POLICY> "Yearly rules on Feb 29: what to do in other years")
                .value_parser(value_parser!(YearlyFeb29Policy)),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            anchor: *matches
                .get_one::<NaiveDate>("anchor")
                .expect("anchor is required"),
            kind: matches
                .get_one("kind")
                .copied()
                .unwrap_or(RecurrenceKind::Daily),
            interval: matches.get_one("interval").copied(),
            until: matches.get_one("until").copied(),
            count: matches.get_one("count").copied(),
            monthly_policy: matches.get_one("monthly-policy").copied(),
            feb29_policy: matches.get_one("feb29-policy").copied(),
        }
    }

    /// Builds the rule, falling back to `config` for anything not given.
    pub fn to_rule(&self, config: &Config) -> Result<RecurrenceRule, RecurrenceError> {
        let mut horizon = Horizon::unbounded();
        if let Some(end) = self.until {
            horizon = horizon.with_end(end);
        }
        if let Some(max) = self.count.or(config.max_occurrences) {
            horizon = horizon.with_max_occurrences(max)?;
        }

        let mut policies = config.policies();
        if let Some(policy) = self.monthly_policy {
            policies = policies.with_monthly(policy);
        }
        if let Some(policy) = self.feb29_policy {
            policies = policies.with_yearly_feb29(policy);
        }

        let interval = self.interval.unwrap_or(config.default_interval);
        Ok(RecurrenceRule::new(self.anchor, self.kind, interval, horizon)?.with_policies(policies))
    }
}

/// The arguments describing the events attached to each occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventArgs {
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub notify: Option<u32>,
}

impl EventArgs {
    pub fn args() -> [Arg; 7] {
        [
            arg!(-t --title <TITLE> "Title of the events").required(true),
            arg!(--"start-time" <TIME> "Start time of each event (HH:MM)")
                .required(true)
                .value_parser(time_arg),
            arg!(--"end-time" <TIME> "End time of each event (HH:MM)")
                .required(true)
                .value_parser(time_arg),
            arg!(--description <DESCRIPTION> "Description of the events"),
            arg!(--location <LOCATION> "Location of the events"),
            arg!(--category <CATEGORY> "Category of the events"),
            arg!(--notify <MINUTES> "Minutes before the start to send a notification")
                .value_parser(value_parser!(u32)),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches
                .get_one::<String>("title")
                .expect("title is required")
                .clone(),
            start_time: *matches
                .get_one::<NaiveTime>("start-time")
                .expect("start time is required"),
            end_time: *matches
                .get_one::<NaiveTime>("end-time")
                .expect("end time is required"),
            description: matches.get_one("description").cloned(),
            location: matches.get_one("location").cloned(),
            category: matches.get_one("category").cloned(),
            notify: matches.get_one("notify").copied(),
        }
    }

    pub fn to_template(&self) -> Result<EventTemplate, RecurrenceError> {
        let mut template = EventTemplate::new(self.title.clone(), self.start_time, self.end_time)?;
        template.description = self.description.clone();
        template.location = self.location.clone();
        template.category = self.category.clone();
        template.notification_minutes = self.notify;
        Ok(template)
    }
}
