//! JSON output formatting for search command

use graphstep_core::error::Result;
use graphstep_core::graph::SearchOutcome;

/// Output in JSON format
pub fn output_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}
