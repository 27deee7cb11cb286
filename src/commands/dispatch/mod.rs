//! Command dispatch logic for graphstep

use std::time::Instant;

use crate::cli::Cli;
use graphstep_core::config::GlobalConfig;
use graphstep_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

/// Load the config named by `--config`, or the default one
pub fn load_config(cli: &Cli) -> Result<GlobalConfig> {
    match &cli.config {
        Some(path) => GlobalConfig::load_from(path),
        None => GlobalConfig::load(),
    }
}

pub fn run(cli: &Cli, config: GlobalConfig, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
