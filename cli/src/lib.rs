// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for recurcal.

mod arg;
mod cli;
mod cmd_expand;
mod cmd_generate;
mod cmd_generate_completion;
mod cmd_occurs;
mod config;
mod occurrence_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
