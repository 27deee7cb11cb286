//! `graphstep search` command - run one algorithm and report its outcome
//!
//! - `--algorithm` picks BFS, DFS, Dijkstra or A*
//! - `--steps` prints the whole recorded trace, not just the outcome
//! - an unreachable end vertex is a normal outcome, not an error

pub mod format;

use tracing::debug;

use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;
use graphstep_core::error::Result;
use graphstep_core::graph::run_search;

use self::format::{output_human, output_json, output_records};

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let graph = ctx.read_graph(&args.graph)?;
    let options = ctx.search_options(args.allow_same);

    let outcome = run_search(args.algorithm, &graph, &args.from, &args.to, &options)?;

    debug!(
        algorithm = %outcome.algorithm,
        steps = outcome.trace.len(),
        reachable = outcome.reachable,
        elapsed = ?ctx.start.elapsed(),
        "search"
    );

    crate::output_by_format_result!(ctx.format(),
        json => output_json(&outcome),
        human => { output_human(ctx.cli, &outcome, args.steps) },
        records => { output_records(&outcome, args.steps) }
    )
}
