//! Status and step formatting helpers

use graphstep_core::error::Result;
use graphstep_core::graph::Step;
use serde_json::json;

/// Print a JSON status message with optional fields
///
/// ```ignore
/// print_json_status("ok", None, &[("vertices", json!(3))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// `  3. [visit] Visiting B...`; `index` is 1-based
pub fn human_step_line(index: usize, step: &Step) -> String {
    format!("{:>3}. [{}] {}", index, step.kind.as_str(), step.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphstep_core::graph::StepKind;

    #[test]
    fn test_print_json_status_with_fields() {
        let result = print_json_status("ok", Some("valid"), &[("vertices", json!(3))]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_human_step_line() {
        let step = Step::new(StepKind::Start, "Starting BFS from A.");
        assert_eq!(human_step_line(1, &step), "  1. [start] Starting BFS from A.");
        assert_eq!(
            human_step_line(12, &step),
            " 12. [start] Starting BFS from A."
        );
    }
}
