use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::algos::Algorithm;
use crate::graph::trace::Trace;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{EdgeRef, Vertex};

/// Preconditions applied before a search runs
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Accept a search whose start and end are the same vertex
    pub allow_same_endpoints: bool,
}

/// Result of one search run
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub start: String,
    pub end: String,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Edge count for BFS/DFS, summed edge cost for Dijkstra/A*
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub reachable: bool,
}

impl SearchOutcome {
    pub(crate) fn new(
        algorithm: Algorithm,
        endpoints: &Endpoints<'_>,
        trace: Trace,
        found: Option<(Vec<String>, f64)>,
    ) -> Self {
        let reachable = found.is_some();
        let (path, cost) = match found {
            Some((path, cost)) => (Some(path), Some(cost)),
            None => (None, None),
        };
        tracing::debug!(
            algorithm = %algorithm,
            steps = trace.len(),
            reachable,
            cost = ?cost,
            "search finished"
        );
        Self {
            algorithm,
            start: endpoints.start.label.clone(),
            end: endpoints.end.label.clone(),
            trace,
            path,
            cost,
            reachable,
        }
    }

    /// Number of edges on the reported path
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Resolved start and end vertices of a run
pub(crate) struct Endpoints<'a> {
    pub start: &'a Vertex,
    pub end: &'a Vertex,
}

/// Check the run's preconditions and look up both endpoints
pub(crate) fn resolve_endpoints<'a>(
    provider: &'a dyn GraphProvider,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<Endpoints<'a>> {
    if provider.vertex_labels().is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let start_vertex = provider
        .vertex(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;
    let end_vertex = provider
        .vertex(end)
        .ok_or_else(|| GraphError::vertex_not_found(end))?;
    if start == end && !opts.allow_same_endpoints {
        return Err(GraphError::SameEndpoints {
            label: start.to_string(),
        });
    }
    Ok(Endpoints {
        start: start_vertex,
        end: end_vertex,
    })
}

/// Set of labels that remembers insertion order
#[derive(Debug, Default)]
pub(crate) struct OrderedSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label; returns false if it was already present
    pub fn insert(&mut self, label: &str) -> bool {
        if self.seen.contains(label) {
            return false;
        }
        self.seen.insert(label.to_string());
        self.order.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.seen.contains(label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// Predecessor edges `(pred, label)` for each label in `order` that has one
pub(crate) fn tree_edges(order: &[String], predecessors: &HashMap<String, String>) -> Vec<EdgeRef> {
    order
        .iter()
        .filter_map(|label| {
            predecessors
                .get(label)
                .map(|pred| EdgeRef::new(pred.as_str(), label.as_str()))
        })
        .collect()
}

/// Walk predecessors back from `end` to `start`
///
/// Returns `None` if the chain breaks or loops before reaching `start`.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<String, String>,
    start: &str,
    end: &str,
) -> Option<Vec<String>> {
    let mut path = vec![end.to_string()];
    let mut current = end;

    while current != start {
        let pred = predecessors.get(current)?;
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    Some(path)
}

/// Build a path or report a broken predecessor chain as an internal failure
pub(crate) fn require_path(
    predecessors: &HashMap<String, String>,
    start: &str,
    end: &str,
) -> Result<Vec<String>> {
    reconstruct_path(predecessors, start, end).ok_or_else(|| {
        GraphError::Other(format!(
            "predecessor chain from {} does not lead back to {}",
            end, start
        ))
    })
}
