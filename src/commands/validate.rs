//! `graphstep validate` command - check a graph file without running anything

use serde_json::json;

use crate::cli::ValidateArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json_status, print_records_header};
use graphstep_core::error::Result;

/// Execute the validate command
///
/// Reading the graph already validates it; any problem surfaces as an error
/// with exit code 3.
pub fn execute(ctx: &CommandContext, args: &ValidateArgs) -> Result<()> {
    let graph = ctx.read_graph(&args.graph)?;
    let vertices = graph.vertices().len();
    let edges = graph.edges().len();
    let directed = graph.edges().iter().filter(|e| e.directed).count();

    crate::output_by_format_result!(ctx.format(),
        json => print_json_status(
            "ok",
            None,
            &[
                ("vertices", json!(vertices)),
                ("edges", json!(edges)),
                ("directed_edges", json!(directed)),
            ],
        ),
        human => {
            if !ctx.cli.quiet {
                println!("ok: {} vertices, {} edges ({} directed)", vertices, edges, directed);
            }
        },
        records => {
            let vertices = vertices.to_string();
            let edges = edges.to_string();
            print_records_header(
                "validate",
                &[("status", "ok"), ("vertices", vertices.as_str()), ("edges", edges.as_str())],
            );
        }
    )
}
