//! `graphstep algorithms` command - list the available searches

use serde_json::json;

use crate::cli::AlgorithmsArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_records_header;
use graphstep_core::error::Result;
use graphstep_core::graph::Algorithm;

/// Execute the algorithms command
pub fn execute(ctx: &CommandContext, args: &AlgorithmsArgs) -> Result<()> {
    crate::output_by_format_result!(ctx.format(),
        json => {
            let output: Vec<_> = Algorithm::ALL
                .iter()
                .map(|a| {
                    let mut obj = json!({
                        "id": a.id(),
                        "name": a.display_name(),
                        "weighted": a.is_weighted(),
                    });
                    if args.pseudocode {
                        if let Some(obj_mut) = obj.as_object_mut() {
                            obj_mut.insert("pseudocode".to_string(), json!(a.pseudocode()));
                        }
                    }
                    obj
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
                if args.pseudocode && i > 0 {
                    println!();
                }
                let weight = if algorithm.is_weighted() { "weighted" } else { "unweighted" };
                println!("{:<9} {} ({})", algorithm.id(), algorithm.display_name(), weight);
                if args.pseudocode {
                    for line in algorithm.pseudocode() {
                        println!("    {}", line);
                    }
                }
            }
        },
        records => {
            let count = Algorithm::ALL.len().to_string();
            print_records_header("algorithms", &[("count", count.as_str())]);
            for algorithm in Algorithm::ALL {
                println!(
                    "A {} weighted={} \"{}\"",
                    algorithm.id(),
                    algorithm.is_weighted(),
                    algorithm.display_name()
                );
                if args.pseudocode {
                    for line in algorithm.pseudocode() {
                        println!("C {} {}", algorithm.id(), line);
                    }
                }
            }
        }
    )
}
