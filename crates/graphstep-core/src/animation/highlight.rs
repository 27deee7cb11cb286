use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::trace::Step;
use crate::graph::types::{EdgeRef, Graph};

/// Highlight colour classes used by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Visited,
    Current,
    Path,
}

impl Highlight {
    /// CSS hex colour
    pub fn color(&self) -> &'static str {
        match self {
            Highlight::Visited => "#60a5fa",
            Highlight::Current => "#f59e0b",
            Highlight::Path => "#10b981",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexHighlight {
    pub highlight: Highlight,
    /// Transient text drawn next to a current vertex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Complete visual state for one step
///
/// Computed from scratch for every step, so stepping backwards never leaves
/// stale colours behind. Later layers win: visited, then current, then path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HighlightState {
    /// Vertex label -> highlight
    pub vertices: BTreeMap<String, VertexHighlight>,
    /// Edge index into [`Graph::edges`] -> highlight
    pub edges: BTreeMap<usize, Highlight>,
}

impl HighlightState {
    pub fn from_step(step: &Step, graph: &Graph) -> Self {
        let mut state = Self::default();

        for label in step.visited_vertices.iter().flatten() {
            state.paint_vertex(graph, label, Highlight::Visited, None);
        }
        for label in step.current_vertices.iter().flatten() {
            state.paint_vertex(graph, label, Highlight::Current, Some(step.message.as_str()));
        }
        for edge in step.visited_edges.iter().flatten() {
            state.paint_edge(graph, edge, Highlight::Visited);
        }
        for edge in step.current_edges.iter().flatten() {
            state.paint_edge(graph, edge, Highlight::Current);
        }
        if let Some(path) = &step.path {
            for label in path {
                state.paint_vertex(graph, label, Highlight::Path, None);
            }
            for pair in path.windows(2) {
                let edge = EdgeRef::new(pair[0].as_str(), pair[1].as_str());
                state.paint_edge(graph, &edge, Highlight::Path);
            }
        }

        state
    }

    pub fn vertex(&self, label: &str) -> Option<&VertexHighlight> {
        self.vertices.get(label)
    }

    pub fn edge(&self, index: usize) -> Option<Highlight> {
        self.edges.get(&index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Labels in the steps are not guaranteed to exist after edits; unknown
    /// ones are ignored.
    fn paint_vertex(
        &mut self,
        graph: &Graph,
        label: &str,
        highlight: Highlight,
        text: Option<&str>,
    ) {
        if !graph.contains(label) {
            return;
        }
        let entry = self
            .vertices
            .entry(label.to_string())
            .or_insert(VertexHighlight {
                highlight,
                text: None,
            });
        entry.highlight = highlight;
        if let Some(text) = text {
            entry.text = Some(text.to_string());
        }
    }

    /// Paint the first edge joining `edge.from` to `edge.to`
    fn paint_edge(&mut self, graph: &Graph, edge: &EdgeRef, highlight: Highlight) {
        if let Some(index) = graph
            .edges()
            .iter()
            .position(|e| e.connects(&edge.from, &edge.to))
        {
            self.edges.insert(index, highlight);
        }
    }
}
