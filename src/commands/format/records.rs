//! Records format helpers
//!
//! Every line starts with a one-letter tag:
//! - `H` header with `key=value` pairs
//! - `S` one trace step
//! - `P` found path, `U` unreachable end vertex
//! - `L` one line of a text representation

use graphstep_core::format::format_cost;
use graphstep_core::graph::{EdgeRef, SearchOutcome, Step};

/// Escape double quotes so a value can sit inside `"..."`
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Print a Records format header
///
/// ```ignore
/// print_records_header("search", &[("algorithm", "bfs"), ("steps", "9")]);
/// // H graphstep=1 records=1 mode=search algorithm=bfs steps=9
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec!["H graphstep=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

/// Labels as CSV, `-` when absent or empty
pub fn format_labels_csv(labels: Option<&[String]>) -> String {
    match labels {
        Some(labels) if !labels.is_empty() => labels.join(","),
        _ => "-".to_string(),
    }
}

/// Edges as `from>to` CSV, `-` when absent or empty
pub fn format_edges_csv(edges: Option<&[EdgeRef]>) -> String {
    match edges {
        Some(edges) if !edges.is_empty() => edges
            .iter()
            .map(|e| format!("{}>{}", e.from, e.to))
            .collect::<Vec<_>>()
            .join(","),
        _ => "-".to_string(),
    }
}

/// One `S` line; `index` is 1-based
pub fn step_record(index: usize, step: &Step) -> String {
    let mut line = format!(
        "S {} {} \"{}\" visited={} current={} edges={} current_edges={}",
        index,
        step.kind.as_str(),
        escape_quotes(&step.message),
        format_labels_csv(step.visited_vertices.as_deref()),
        format_labels_csv(step.current_vertices.as_deref()),
        format_edges_csv(step.visited_edges.as_deref()),
        format_edges_csv(step.current_edges.as_deref()),
    );
    if let Some(path) = &step.path {
        line.push_str(&format!(" path={}", format_labels_csv(Some(path.as_slice()))));
    }
    line
}

/// `P A,B,C cost=2` for a found path, `U from=A to=C` otherwise
pub fn outcome_record(outcome: &SearchOutcome) -> String {
    match (&outcome.path, outcome.cost) {
        (Some(path), Some(cost)) => format!(
            "P {} cost={}",
            format_labels_csv(Some(path.as_slice())),
            format_cost(cost)
        ),
        _ => format!("U from={} to={}", outcome.start, outcome.end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphstep_core::graph::StepKind;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn test_labels_csv() {
        assert_eq!(format_labels_csv(None), "-");
        assert_eq!(format_labels_csv(Some(&[][..])), "-");
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(format_labels_csv(Some(labels.as_slice())), "A,B");
    }

    #[test]
    fn test_step_record_visit() {
        let step = Step::new(StepKind::Visit, "Visiting B...")
            .current("B")
            .visited(vec!["A".to_string(), "B".to_string()])
            .visited_edges(vec![EdgeRef::new("A", "B")]);
        assert_eq!(
            step_record(3, &step),
            "S 3 visit \"Visiting B...\" visited=A,B current=B edges=A>B current_edges=-"
        );
    }

    #[test]
    fn test_step_record_with_path() {
        let step = Step::new(StepKind::Found, "Path found! Length: 1 edges.")
            .path(vec!["A".to_string(), "B".to_string()]);
        assert!(step_record(4, &step).ends_with(" path=A,B"));
    }
}
