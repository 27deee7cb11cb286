//! Human-readable output formatting for search command

use crate::cli::Cli;
use crate::commands::format::human_step_line;
use graphstep_core::format::format_cost;
use graphstep_core::graph::SearchOutcome;

/// Output in human-readable format
pub fn output_human(cli: &Cli, outcome: &SearchOutcome, show_steps: bool) {
    if !cli.quiet {
        println!(
            "{} from {} to {} ({} steps)",
            outcome.algorithm.display_name(),
            outcome.start,
            outcome.end,
            outcome.trace.len()
        );
    }

    if show_steps {
        for (i, step) in outcome.trace.iter().enumerate() {
            println!("{}", human_step_line(i + 1, step));
        }
    }

    let Some(path) = &outcome.path else {
        println!("No path from {} to {}", outcome.start, outcome.end);
        return;
    };

    println!("Path: {}", path.join(" -> "));
    if outcome.algorithm.is_weighted() {
        if let Some(cost) = outcome.cost {
            println!("Cost: {}", format_cost(cost));
        }
    } else if let Some(length) = outcome.path_length() {
        println!("Length: {} edges", length);
    }
}
