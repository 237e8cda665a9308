// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use recurcal_core::{Config, EventBatch};

use crate::arg::{EventArgs, RuleArgs};

#[derive(Debug, Clone)]
pub struct CmdExpand {
    pub rule: RuleArgs,
    pub event: EventArgs,
}

impl CmdExpand {
    pub const NAME: &str = "expand";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Expand a recurrence rule into events, printed as a bulk-create payload")
            .args(RuleArgs::args())
            .args(EventArgs::args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: RuleArgs::from(matches),
            event: EventArgs::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "expanding events...");
        println!("{}", self.batch(config)?);
        Ok(())
    }

    /// The pretty-printed `{ "events": [...] }` payload.
    pub fn batch(&self, config: &Config) -> Result<String, Box<dyn Error>> {
        let template = self.event.to_template()?;
        let occurrences = self.rule.to_rule(config)?.generate();
        let batch = EventBatch::from(template.expand(&occurrences));
        Ok(serde_json::to_string_pretty(&batch)?)
    }
}
