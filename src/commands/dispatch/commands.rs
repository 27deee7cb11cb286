//! Command implementations for all graphstep commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{algorithms, play, repr, search, validate};
use graphstep_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Repr(args) => repr::execute(ctx, args),
            Commands::Play(args) => play::execute(ctx, args),
            Commands::Algorithms(args) => algorithms::execute(ctx, args),
            Commands::Validate(args) => validate::execute(ctx, args),
        }
    }
}
