use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::graph::algos::shared::{
    require_path, resolve_endpoints, tree_edges, OrderedSet, SearchOptions, SearchOutcome,
};
use crate::graph::algos::Algorithm;
use crate::graph::trace::{Step, StepKind, Trace};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::EdgeRef;

/// State tracked during BFS
struct BfsState {
    queue: VecDeque<String>,
    visited: OrderedSet,
    predecessors: HashMap<String, String>,
    trace: Trace,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let mut visited = OrderedSet::new();
        visited.insert(start);
        Self {
            queue: VecDeque::from([start.to_string()]),
            visited,
            predecessors: HashMap::new(),
            trace: Trace::new(),
        }
    }

    fn discovered_edges(&self) -> Vec<EdgeRef> {
        tree_edges(self.visited.as_slice(), &self.predecessors)
    }
}

/// Breadth-first search from `start` until `end` is dequeued
///
/// The first path found is shortest by edge count. `cost` is that edge count.
#[tracing::instrument(skip(provider, opts), fields(start = %start, end = %end))]
pub fn bfs_search(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    let endpoints = resolve_endpoints(provider, start, end, opts)?;
    let mut state = BfsState::new(start);

    state.trace.push(
        Step::new(StepKind::Start, format!("Starting BFS from {}.", start))
            .visited(state.visited.to_vec()),
    );

    let mut found = false;
    while let Some(current) = state.queue.pop_front() {
        state.trace.push(
            Step::new(StepKind::Visit, format!("Visiting {}...", current))
                .current(&current)
                .visited(state.visited.to_vec())
                .visited_edges(state.discovered_edges()),
        );

        if current == end {
            found = true;
            break;
        }

        for neighbor in provider.neighbors(&current) {
            let label = neighbor.vertex.label.as_str();
            if !state.visited.insert(label) {
                continue;
            }
            state
                .predecessors
                .insert(label.to_string(), current.clone());
            state.queue.push_back(label.to_string());
            state.trace.push(
                Step::new(
                    StepKind::Discover,
                    format!("Discovering {} from {}.", label, current),
                )
                .visited(state.visited.to_vec())
                .current_edge(&current, label),
            );
        }
    }

    let result = if found {
        let path = require_path(&state.predecessors, start, end)?;
        let length = path.len() - 1;
        state.trace.push(
            Step::new(
                StepKind::Found,
                format!("Path found! Length: {} edges.", length),
            )
            .visited(state.visited.to_vec())
            .path(path.clone()),
        );
        Some((path, length as f64))
    } else {
        state.trace.push(
            Step::new(
                StepKind::Unreachable,
                format!("Vertex {} is not reachable from {}.", end, start),
            )
            .visited(state.visited.to_vec()),
        );
        None
    };

    Ok(SearchOutcome::new(
        Algorithm::Bfs,
        &endpoints,
        state.trace,
        result,
    ))
}
