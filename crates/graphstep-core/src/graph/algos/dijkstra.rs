use std::collections::HashMap;

use crate::error::Result;
use crate::format::format_cost;
use crate::graph::algos::shared::{
    require_path, resolve_endpoints, tree_edges, SearchOptions, SearchOutcome,
};
use crate::graph::algos::Algorithm;
use crate::graph::queue::PriorityQueue;
use crate::graph::trace::{Step, StepKind, Trace};
use crate::graph::traversal::GraphProvider;

/// State tracked during Dijkstra search
struct DijkstraState<'a> {
    /// Vertex labels in graph order
    labels: Vec<&'a str>,
    start: &'a str,
    distances: HashMap<String, f64>,
    predecessors: HashMap<String, String>,
    queue: PriorityQueue<String>,
    trace: Trace,
}

impl<'a> DijkstraState<'a> {
    fn new(provider: &'a dyn GraphProvider, start: &'a str) -> Self {
        let mut queue = PriorityQueue::new();
        queue.enqueue(start.to_string(), 0.0);
        Self {
            labels: provider.vertex_labels(),
            start,
            distances: HashMap::from([(start.to_string(), 0.0)]),
            predecessors: HashMap::new(),
            queue,
            trace: Trace::new(),
        }
    }

    fn distance(&self, label: &str) -> f64 {
        self.distances.get(label).copied().unwrap_or(f64::INFINITY)
    }

    /// Start plus every vertex with a predecessor, in graph order
    fn reached(&self) -> Vec<String> {
        self.labels
            .iter()
            .filter(|l| **l == self.start || self.predecessors.contains_key(**l))
            .map(|l| l.to_string())
            .collect()
    }

    /// Relax every edge out of `current`
    fn relax_neighbors(&mut self, provider: &dyn GraphProvider, current: &str) {
        let base = self.distance(current);
        for neighbor in provider.neighbors(current) {
            let label = neighbor.vertex.label.as_str();
            let known = self.distance(label);
            let candidate = base + neighbor.cost;

            self.trace.push(
                Step::new(
                    StepKind::Analyze,
                    format!(
                        "Analyzing {} (current distance: {})",
                        label,
                        format_cost(known)
                    ),
                )
                .current_edge(current, label),
            );

            if candidate < known {
                self.distances.insert(label.to_string(), candidate);
                self.predecessors
                    .insert(label.to_string(), current.to_string());
                self.queue.enqueue(label.to_string(), candidate);
                self.trace.push(
                    Step::new(
                        StepKind::Update,
                        format!(
                            "Distance to {} updated: {}",
                            label,
                            format_cost(candidate)
                        ),
                    )
                    .visited(self.reached()),
                );
            }
        }
    }
}

/// Dijkstra's shortest path by summed edge cost
///
/// Stops as soon as `end` leaves the queue. Queue entries made stale by a
/// later improvement are dropped silently when dequeued.
#[tracing::instrument(skip(provider, opts), fields(start = %start, end = %end))]
pub fn dijkstra_search(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    let endpoints = resolve_endpoints(provider, start, end, opts)?;
    let mut state = DijkstraState::new(provider, start);

    state.trace.push(
        Step::new(
            StepKind::Start,
            format!("Starting Dijkstra. Distance of {} = 0.", start),
        )
        .visited(vec![start.to_string()]),
    );

    while let Some((current, priority)) = state.queue.dequeue() {
        let distance = state.distance(&current);
        if priority > distance {
            tracing::trace!(vertex = %current, priority, distance, "skipping stale entry");
            continue;
        }

        let reached = state.reached();
        state.trace.push(
            Step::new(
                StepKind::Visit,
                format!("Visiting {} (distance: {})", current, format_cost(distance)),
            )
            .current(&current)
            .visited_edges(tree_edges(&reached, &state.predecessors))
            .visited(reached),
        );

        if current == end {
            break;
        }

        state.relax_neighbors(provider, &current);
    }

    let cost = state.distance(end);
    let result = if cost.is_finite() {
        let path = require_path(&state.predecessors, start, end)?;
        state.trace.push(
            Step::new(
                StepKind::Found,
                format!("Shortest path found! Cost: {}", format_cost(cost)),
            )
            .visited(state.reached())
            .path(path.clone()),
        );
        Some((path, cost))
    } else {
        state.trace.push(
            Step::new(
                StepKind::Unreachable,
                format!("Vertex {} is not reachable from {}.", end, start),
            )
            .visited(state.reached()),
        );
        None
    };

    Ok(SearchOutcome::new(
        Algorithm::Dijkstra,
        &endpoints,
        state.trace,
        result,
    ))
}
