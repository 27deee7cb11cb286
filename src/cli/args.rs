use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_algorithm, parse_representation, parse_speed};
use graphstep_core::graph::{Algorithm, RepresentationKind};

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Graph snapshot (JSON file, or - for stdin)
    pub graph: PathBuf,

    /// Algorithm to run (bfs, dfs, dijkstra, astar)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Start vertex label
    #[arg(long)]
    pub from: String,

    /// End vertex label
    #[arg(long)]
    pub to: String,

    /// Print every recorded step, not just the outcome
    #[arg(long)]
    pub steps: bool,

    /// Allow the start and end vertex to be the same
    #[arg(long)]
    pub allow_same: bool,
}

/// Arguments for the repr command.
#[derive(Args, Debug)]
pub struct ReprArgs {
    /// Graph snapshot (JSON file, or - for stdin)
    pub graph: PathBuf,

    /// Representation (list, adjacency-matrix, incidence-matrix)
    #[arg(long, short, value_parser = parse_representation, default_value = "list")]
    pub kind: RepresentationKind,
}

/// Arguments for the play command.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Graph snapshot (JSON file, or - for stdin)
    pub graph: PathBuf,

    /// Algorithm to run (bfs, dfs, dijkstra, astar)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Start vertex label
    #[arg(long)]
    pub from: String,

    /// End vertex label
    #[arg(long)]
    pub to: String,

    /// Milliseconds between steps (overrides the config file)
    #[arg(long, value_parser = parse_speed)]
    pub speed: Option<u64>,

    /// Allow the start and end vertex to be the same
    #[arg(long)]
    pub allow_same: bool,
}

/// Arguments for the algorithms command.
#[derive(Args, Debug)]
pub struct AlgorithmsArgs {
    /// Include the pseudocode outline of each algorithm
    #[arg(long)]
    pub pseudocode: bool,
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Graph snapshot (JSON file, or - for stdin)
    pub graph: PathBuf,
}
