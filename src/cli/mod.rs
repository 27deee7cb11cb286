//! CLI argument parsing for graphstep
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{AlgorithmsArgs, PlayArgs, ReprArgs, SearchArgs, ValidateArgs};
pub use graphstep_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphstep - step-by-step graph search visualizer
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records); defaults to the config file value
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug", "graphstep_core=trace")
    #[arg(long, global = true, env = "GRAPHSTEP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config file (default: ~/.config/graphstep/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search and print its outcome
    Search(SearchArgs),

    /// Print the adjacency list, adjacency matrix or incidence matrix
    Repr(ReprArgs),

    /// Replay a search step by step in real time
    Play(PlayArgs),

    /// List the available algorithms
    Algorithms(AlgorithmsArgs),

    /// Check a graph file without running anything
    Validate(ValidateArgs),
}
