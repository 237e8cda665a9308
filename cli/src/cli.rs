// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use recurcal_core::{APP_NAME, Config};
use tracing_subscriber::EnvFilter;

use crate::cmd_expand::CmdExpand;
use crate::cmd_generate::CmdGenerate;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_occurs::CmdOccurs;
use crate::config::parse_config;

/// Run the recurcal command-line interface.
///
/// Failures are reported on stderr and returned, so the caller can exit non-zero.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    execute(Cli::parse()).await
}

async fn execute(cli: Result<Cli, Box<dyn Error>>) -> Result<(), Box<dyn Error>> {
    let result = match cli {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        eprintln!("{} {}", "Error:".red(), e);
    }
    result
}

/// Logs go to stderr, filtered by `RUST_LOG` and defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Generate the dates of recurring events, with explicit month-end and leap-day policies.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $RECURCAL_CONFIG, then \
$XDG_CONFIG_HOME/recurcal/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/recurcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdGenerate::command())
            .subcommand(CmdExpand::command())
            .subcommand(CmdOccurs::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdGenerate::NAME, matches)) => Generate(CmdGenerate::from(matches)),
            Some((CmdExpand::NAME, matches)) => Expand(CmdExpand::from(matches)),
            Some((CmdOccurs::NAME, matches)) => Occurs(CmdOccurs::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the occurrences of a rule
    Generate(CmdGenerate),

    /// Expand a rule into events
    Expand(CmdExpand),

    /// Check whether a date is an occurrence
    Occurs(CmdOccurs),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Generate(a) => Self::run_with(config, |x| a.run(x)).await,
            Expand(a)   => Self::run_with(config, |x| a.run(x)).await,
            Occurs(a)   => Self::run_with(config, |x| a.run(x)).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&Config) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        f(&config)
    }
}
