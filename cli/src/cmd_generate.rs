// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use recurcal_core::Config;

use crate::arg::{CommonArgs, RuleArgs};
use crate::occurrence_formatter::{OccurrenceColumn, OccurrenceFormatter};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerate {
    pub rule: RuleArgs,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdGenerate {
    pub const NAME: &str = "generate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("gen")
            .about("List the occurrences of a recurrence rule")
            .args(RuleArgs::args())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: RuleArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating occurrences...");
        let rule = self.rule.to_rule(config)?;
        let occurrences = rule.generate();

        let columns = if self.verbose {
            OccurrenceColumn::verbose()
        } else {
            OccurrenceColumn::basic()
        };
        let formatter = OccurrenceFormatter::new(columns).with_output_format(self.output_format);
        println!("{}", formatter.format(&occurrences));
        Ok(())
    }
}
