//! Search algorithm implementations
//!
//! Each algorithm records a [`Trace`](crate::graph::trace::Trace) of what it
//! does while it searches:
//! - `bfs`: breadth-first search, shortest path by edge count
//! - `dfs`: iterative depth-first search, some path
//! - `dijkstra`: shortest path by summed edge cost
//! - `astar`: Dijkstra guided by straight-line distance to the end
//! - `shared`: endpoint checks, path reconstruction, outcome type

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::types::Graph;

pub use astar::astar_search;
pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use dijkstra::dijkstra_search;
pub use shared::{SearchOptions, SearchOutcome};

/// The search algorithms the engine can animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search (BFS)",
            Algorithm::Dfs => "Depth-First Search (DFS)",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Whether the algorithm takes edge costs into account
    pub fn is_weighted(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Numbered outline of the algorithm, shown next to the animation
    pub fn pseudocode(&self) -> &'static [&'static str] {
        match self {
            Algorithm::Bfs => &[
                "1. Mark start as visited and enqueue it",
                "2. While the queue is not empty:",
                "3.   Dequeue vertex u",
                "4.   If u is the end vertex, stop: path found",
                "5.   For each neighbor v of u not yet visited:",
                "6.     Mark v visited, set pred[v] = u, enqueue v",
                "7. Queue empty: end is unreachable",
            ],
            Algorithm::Dfs => &[
                "1. Push start onto the stack",
                "2. While the stack is not empty:",
                "3.   Pop vertex u; skip it if already visited",
                "4.   Mark u visited",
                "5.   If u is the end vertex, stop: path found",
                "6.   For each neighbor v of u in reverse order:",
                "7.     If v is not visited, set pred[v] = u and push v",
                "8. Stack empty: end is unreachable",
            ],
            Algorithm::Dijkstra => &[
                "1. dist[v] = infinity for every v; dist[start] = 0",
                "2. Enqueue start with priority 0",
                "3. While the queue is not empty:",
                "4.   Dequeue u with the smallest distance",
                "5.   If u is the end vertex, stop",
                "6.   For each neighbor v of u with edge cost w:",
                "7.     If dist[u] + w < dist[v]:",
                "8.       dist[v] = dist[u] + w, pred[v] = u, enqueue v",
                "9. Rebuild the path from pred, or report unreachable",
            ],
            Algorithm::AStar => &[
                "1. g[v] = infinity for every v; g[start] = 0",
                "2. f[start] = h(start), the straight-line distance to end",
                "3. Enqueue start with priority f[start]",
                "4. While the queue is not empty:",
                "5.   Dequeue u with the smallest f",
                "6.   If u is the end vertex, rebuild the path and stop",
                "7.   For each neighbor v of u with edge cost w:",
                "8.     If g[u] + w < g[v]:",
                "9.       pred[v] = u, g[v] = g[u] + w, f[v] = g[v] + h(v)",
                "10.      Enqueue v with priority f[v]",
                "11. Queue empty: end is unreachable",
            ],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a-star" | "a*" => Ok(Algorithm::AStar),
            other => Err(GraphError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Validate the graph and run one algorithm on it
///
/// Invalid input (empty graph, unknown endpoints, start == end when not
/// allowed) is an error; an unreachable end is a normal outcome with
/// `reachable == false`.
#[tracing::instrument(skip(graph, opts), fields(algorithm = %algorithm, start = %start, end = %end))]
pub fn run_search(
    algorithm: Algorithm,
    graph: &Graph,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    let started = Instant::now();
    graph.validate()?;
    let outcome = match algorithm {
        Algorithm::Bfs => bfs_search(graph, start, end, opts),
        Algorithm::Dfs => dfs_search(graph, start, end, opts),
        Algorithm::Dijkstra => dijkstra_search(graph, start, end, opts),
        Algorithm::AStar => astar_search(graph, start, end, opts),
    }?;
    crate::trace_time!(started, "run_search", steps = outcome.trace.len());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::trace::StepKind;
    use crate::graph::types::{Edge, EdgeCosts, Vertex};

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("DFS".parse::<Algorithm>().unwrap(), Algorithm::Dfs);
        assert_eq!("dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("a*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert!(matches!(
            "prim".parse::<Algorithm>(),
            Err(GraphError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_algorithm_ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(
                serde_json::to_value(algorithm).unwrap(),
                serde_json::Value::String(algorithm.id().to_string())
            );
            assert!(!algorithm.pseudocode().is_empty());
        }
    }

    fn line_graph() -> Graph {
        Graph::from_parts(
            vec![
                Vertex::new("A", 0.0, 0.0),
                Vertex::new("B", 1.0, 0.0),
                Vertex::new("C", 2.0, 0.0),
            ],
            vec![Edge::directed("A", "B"), Edge::directed("B", "C")],
            EdgeCosts::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_run_search_rejects_empty_graph() {
        let err = run_search(
            Algorithm::Bfs,
            &Graph::new(),
            "A",
            "B",
            &SearchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::EmptyGraph));
    }

    #[test]
    fn test_run_search_rejects_unknown_vertex() {
        let err = run_search(
            Algorithm::Dijkstra,
            &line_graph(),
            "A",
            "Z",
            &SearchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { ref label } if label == "Z"));
    }

    #[test]
    fn test_run_search_rejects_same_endpoints_by_default() {
        let err = run_search(
            Algorithm::AStar,
            &line_graph(),
            "B",
            "B",
            &SearchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::SameEndpoints { .. }));
    }

    #[test]
    fn test_run_search_same_endpoints_when_allowed() {
        let opts = SearchOptions {
            allow_same_endpoints: true,
        };
        for algorithm in Algorithm::ALL {
            let outcome = run_search(algorithm, &line_graph(), "B", "B", &opts).unwrap();
            assert!(outcome.reachable, "{algorithm}");
            assert_eq!(outcome.path, Some(vec!["B".to_string()]));
            assert_eq!(outcome.cost, Some(0.0));

            let kinds: Vec<StepKind> = outcome.trace.iter().map(|s| s.kind).collect();
            assert_eq!(
                kinds,
                vec![StepKind::Start, StepKind::Visit, StepKind::Found],
                "{algorithm}"
            );
            assert_eq!(
                outcome.trace.steps()[1].current_vertices,
                Some(vec!["B".to_string()])
            );
        }
    }

    #[test]
    fn test_every_algorithm_ends_with_terminal_step() {
        for algorithm in Algorithm::ALL {
            let outcome =
                run_search(algorithm, &line_graph(), "A", "C", &SearchOptions::default()).unwrap();
            let last = outcome.trace.last().unwrap();
            assert!(last.kind.is_terminal(), "{algorithm}");
            assert_eq!(last.path.as_ref(), outcome.path.as_ref());
            assert!(outcome.trace.iter().all(|s| !s.message.is_empty()));
        }
    }

    #[test]
    fn test_search_does_not_mutate_graph() {
        let graph = line_graph();
        let before = graph.clone();
        for algorithm in Algorithm::ALL {
            run_search(algorithm, &graph, "A", "C", &SearchOptions::default()).unwrap();
        }
        assert_eq!(graph, before);
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = run_search(
            Algorithm::Bfs,
            &line_graph(),
            "A",
            "C",
            &SearchOptions::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["algorithm"], "bfs");
        assert_eq!(json["reachable"], true);
        assert_eq!(json["path"][2], "C");
        assert_eq!(json["trace"][0]["kind"], "start");
    }
}
