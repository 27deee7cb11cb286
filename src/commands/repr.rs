//! `graphstep repr` command - print a text representation of the graph

use serde_json::json;

use crate::cli::ReprArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_records_header;
use graphstep_core::error::Result;
use graphstep_core::graph::{generate_representation, RepresentationKind};

/// Execute the repr command
pub fn execute(ctx: &CommandContext, args: &ReprArgs) -> Result<()> {
    let graph = ctx.read_graph(&args.graph)?;
    let text = generate_representation(args.kind, &graph)?;

    crate::output_by_format_result!(ctx.format(),
        json => {
            let output = json!({
                "kind": args.kind,
                "title": args.kind.title(),
                "description": args.kind.description(),
                "text": text,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            // Matrices carry their own title
            if args.kind == RepresentationKind::List && !ctx.cli.quiet {
                println!("{}", args.kind.title());
                println!();
            }
            print!("{}", text);
        },
        records => {
            let lines: Vec<&str> = text.lines().collect();
            let count = lines.len().to_string();
            print_records_header("repr", &[("kind", args.kind.id()), ("lines", count.as_str())]);
            for line in lines {
                println!("L {}", line);
            }
        }
    )
}
