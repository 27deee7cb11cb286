//! Records output formatting for search command

use crate::commands::format::{outcome_record, print_records_header, step_record};
use graphstep_core::graph::SearchOutcome;

/// Output in records format
pub fn output_records(outcome: &SearchOutcome, show_steps: bool) {
    let steps = outcome.trace.len().to_string();
    let reachable = outcome.reachable.to_string();
    print_records_header(
        "search",
        &[
            ("algorithm", outcome.algorithm.id()),
            ("from", outcome.start.as_str()),
            ("to", outcome.end.as_str()),
            ("steps", steps.as_str()),
            ("reachable", reachable.as_str()),
        ],
    );

    if show_steps {
        for (i, step) in outcome.trace.iter().enumerate() {
            println!("{}", step_record(i + 1, step));
        }
    }

    println!("{}", outcome_record(outcome));
}
