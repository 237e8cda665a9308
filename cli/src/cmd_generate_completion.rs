// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{generate, generate_to};
use clap_complete_nushell::Nushell;
use recurcal_core::APP_NAME;

use crate::Cli;

/// Completion scripts for every subcommand, including the kind and policy values.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub out_dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --"out-dir" <DIR> "Write the script into DIR instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: *matches
                .get_one::<Shell>("shell")
                .expect("shell is required"),
            out_dir: matches.get_one("out-dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.out_dir {
            Some(dir) => {
                let path = self.write_to(dir)?;
                println!("{}", path.display());
            }
            None => self.generate(&mut io::stdout()),
        }
        Ok(())
    }

    pub fn generate(&self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, APP_NAME, buf),
            None => generate(Nushell {}, &mut cmd, APP_NAME, buf),
        }
    }

    /// Writes the script under the shell's conventional file name, e.g. `_recurcal` for zsh.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let mut cmd = Cli::command();
        match self.shell.builtin() {
            Some(shell) => generate_to(shell, &mut cmd, APP_NAME, dir.as_os_str()),
            None => generate_to(Nushell {}, &mut cmd, APP_NAME, dir.as_os_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`; nushell lives in its own crate.
    const fn builtin(self) -> Option<clap_complete::Shell> {
        match self {
            Shell::Bash => Some(clap_complete::Shell::Bash),
            Shell::Elvish => Some(clap_complete::Shell::Elvish),
            Shell::Fish => Some(clap_complete::Shell::Fish),
            Shell::PowerShell => Some(clap_complete::Shell::PowerShell),
            Shell::Zsh => Some(clap_complete::Shell::Zsh),
            Shell::Nushell => None,
        }
    }
}
