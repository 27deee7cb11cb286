use std::collections::HashMap;

use crate::error::Result;
use crate::graph::algos::shared::{
    require_path, resolve_endpoints, tree_edges, OrderedSet, SearchOptions, SearchOutcome,
};
use crate::graph::algos::Algorithm;
use crate::graph::trace::{Step, StepKind, Trace};
use crate::graph::traversal::GraphProvider;

/// State tracked during DFS
///
/// A vertex may sit on the stack several times; only the first pop counts.
struct DfsState {
    stack: Vec<String>,
    visited: OrderedSet,
    predecessors: HashMap<String, String>,
    trace: Trace,
}

impl DfsState {
    fn new(start: &str) -> Self {
        Self {
            stack: vec![start.to_string()],
            visited: OrderedSet::new(),
            predecessors: HashMap::new(),
            trace: Trace::new(),
        }
    }

    /// Push every unvisited neighbor, last-declared first, so the
    /// first-declared neighbor is popped next
    fn push_neighbors(&mut self, provider: &dyn GraphProvider, current: &str) {
        for neighbor in provider.neighbors(current).into_iter().rev() {
            let label = neighbor.vertex.label.as_str();
            if self.visited.contains(label) {
                continue;
            }
            // Latest push wins; it is also the copy popped first
            self.predecessors
                .insert(label.to_string(), current.to_string());
            self.stack.push(label.to_string());
            self.trace.push(
                Step::new(
                    StepKind::Push,
                    format!("Pushing {} from {}.", label, current),
                )
                .visited(self.visited.to_vec())
                .current_edge(current, label),
            );
        }
    }
}

/// Iterative depth-first search from `start` until `end` is popped
///
/// The path found is not necessarily the shortest. `cost` is its edge count.
#[tracing::instrument(skip(provider, opts), fields(start = %start, end = %end))]
pub fn dfs_search(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    let endpoints = resolve_endpoints(provider, start, end, opts)?;
    let mut state = DfsState::new(start);

    state.trace.push(
        Step::new(StepKind::Start, format!("Starting DFS from {}.", start)).current(start),
    );

    let mut found = false;
    while let Some(current) = state.stack.pop() {
        if !state.visited.insert(&current) {
            continue;
        }

        state.trace.push(
            Step::new(StepKind::Visit, format!("Visiting {}...", current))
                .current(&current)
                .visited(state.visited.to_vec())
                .visited_edges(tree_edges(state.visited.as_slice(), &state.predecessors)),
        );

        if current == end {
            found = true;
            break;
        }

        state.push_neighbors(provider, &current);
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
                format!("Vertex {} is not reachable.", end),
            )
            .visited(state.visited.to_vec()),
        );
        None
    };

    Ok(SearchOutcome::new(
        Algorithm::Dfs,
        &endpoints,
        state.trace,
        result,
    ))
}
