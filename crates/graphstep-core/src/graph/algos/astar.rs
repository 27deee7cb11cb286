use std::collections::HashMap;

use crate::error::Result;
use crate::format::format_cost;
use crate::graph::algos::shared::{
    require_path, resolve_endpoints, tree_edges, OrderedSet, SearchOptions, SearchOutcome,
};
use crate::graph::algos::Algorithm;
use crate::graph::queue::PriorityQueue;
use crate::graph::trace::{Step, StepKind, Trace};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;

/// State tracked during A* search
struct AStarState<'a> {
    goal: &'a Vertex,
    g_score: HashMap<String, f64>,
    f_score: HashMap<String, f64>,
    predecessors: HashMap<String, String>,
    reached: OrderedSet,
    queue: PriorityQueue<String>,
    trace: Trace,
}

impl<'a> AStarState<'a> {
    fn new(start: &Vertex, goal: &'a Vertex) -> Self {
        let f = start.distance_to(goal);
        let mut queue = PriorityQueue::new();
        queue.enqueue(start.label.clone(), f);
        let mut reached = OrderedSet::new();
        reached.insert(&start.label);
        Self {
            goal,
            g_score: HashMap::from([(start.label.clone(), 0.0)]),
            f_score: HashMap::from([(start.label.clone(), f)]),
            predecessors: HashMap::new(),
            reached,
            queue,
            trace: Trace::new(),
        }
    }

    fn g(&self, label: &str) -> f64 {
        self.g_score.get(label).copied().unwrap_or(f64::INFINITY)
    }

    fn f(&self, label: &str) -> f64 {
        self.f_score.get(label).copied().unwrap_or(f64::INFINITY)
    }

    fn relax_neighbors(&mut self, provider: &dyn GraphProvider, current: &str) {
        let base = self.g(current);
        for neighbor in provider.neighbors(current) {
            let label = neighbor.vertex.label.as_str();
            let known = self.g(label);
            let tentative = base + neighbor.cost;

            self.trace.push(
                Step::new(
                    StepKind::Analyze,
                    format!("Analyzing {} (current g: {})", label, format_cost(known)),
                )
                .current_edge(current, label),
            );

            if tentative < known {
                let f = tentative + neighbor.vertex.distance_to(self.goal);
                self.predecessors
                    .insert(label.to_string(), current.to_string());
                self.g_score.insert(label.to_string(), tentative);
                self.f_score.insert(label.to_string(), f);
                self.queue.enqueue(label.to_string(), f);
                self.reached.insert(label);
                self.trace.push(
                    Step::new(
                        StepKind::Update,
                        format!(
                            "Path to {} updated! g={}, f={:.2}",
                            label,
                            format_cost(tentative),
                            f
                        ),
                    )
                    .visited(self.reached.to_vec()),
                );
            }
        }
    }
}

/// A* search guided by straight-line distance to `end`
///
/// Returns as soon as `end` is dequeued. Vertices may be reopened when a
/// cheaper route to them turns up later.
#[tracing::instrument(skip(provider, opts), fields(start = %start, end = %end))]
pub fn astar_search(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    let endpoints = resolve_endpoints(provider, start, end, opts)?;
    let mut state = AStarState::new(endpoints.start, endpoints.end);

    state.trace.push(
        Step::new(
            StepKind::Start,
            format!("Starting A*. g({})=0, f={:.2}", start, state.f(start)),
        )
        .visited(vec![start.to_string()]),
    );

    while let Some((current, priority)) = state.queue.dequeue() {
        let f = state.f(&current);
        if priority > f {
            tracing::trace!(vertex = %current, priority, f, "skipping stale entry");
            continue;
        }

        let g = state.g(&current);
        state.trace.push(
            Step::new(
                StepKind::Visit,
                format!(
                    "Visiting {} (g: {}, f: {:.2})",
                    current,
                    format_cost(g),
                    f
                ),
            )
            .current(&current)
            .visited(state.reached.to_vec())
            .visited_edges(tree_edges(state.reached.as_slice(), &state.predecessors)),
        );

        if current == end {
            let path = require_path(&state.predecessors, start, end)?;
            state.trace.push(
                Step::new(StepKind::Found, format!("Path found! Cost: {}", format_cost(g)))
                    .visited(state.reached.to_vec())
                    .path(path.clone()),
            );
            return Ok(SearchOutcome::new(
                Algorithm::AStar,
                &endpoints,
                state.trace,
                Some((path, g)),
            ));
        }

        state.relax_neighbors(provider, &current);
    }

    state.trace.push(
        Step::new(
            StepKind::Unreachable,
            format!("Vertex {} is not reachable.", end),
        )
        .visited(state.reached.to_vec()),
    );

    Ok(SearchOutcome::new(
        Algorithm::AStar,
        &endpoints,
        state.trace,
        None,
    ))
}
