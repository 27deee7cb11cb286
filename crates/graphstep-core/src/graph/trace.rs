//! Step-by-step traces produced by the search algorithms
//!
//! Each step declares only its own highlights; it is not a diff against the
//! previous step. A trace is built completely before playback starts.

use serde::Serialize;

use crate::graph::types::EdgeRef;

/// What a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Search initialised at the start vertex
    Start,
    /// A vertex was dequeued/popped and is being processed
    Visit,
    /// BFS found a new vertex
    Discover,
    /// DFS pushed a vertex onto its stack
    Push,
    /// Dijkstra/A* examined an edge
    Analyze,
    /// Dijkstra/A* improved a tentative distance
    Update,
    /// Terminal step carrying the reconstructed path
    Found,
    /// Terminal step: the end vertex cannot be reached
    Unreachable,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Visit => "visit",
            StepKind::Discover => "discover",
            StepKind::Push => "push",
            StepKind::Analyze => "analyze",
            StepKind::Update => "update",
            StepKind::Found => "found",
            StepKind::Unreachable => "unreachable",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, StepKind::Found | StepKind::Unreachable)
    }
}

/// One recorded moment of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub kind: StepKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_vertices: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_vertices: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_edges: Option<Vec<EdgeRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_edges: Option<Vec<EdgeRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl Step {
    pub fn new(kind: StepKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            visited_vertices: None,
            current_vertices: None,
            visited_edges: None,
            current_edges: None,
            path: None,
        }
    }

    pub fn visited(mut self, labels: Vec<String>) -> Self {
        self.visited_vertices = Some(labels);
        self
    }

    pub fn current(mut self, label: &str) -> Self {
        self.current_vertices = Some(vec![label.to_string()]);
        self
    }

    pub fn visited_edges(mut self, edges: Vec<EdgeRef>) -> Self {
        self.visited_edges = Some(edges);
        self
    }

    pub fn current_edge(mut self, from: &str, to: &str) -> Self {
        self.current_edges = Some(vec![EdgeRef::new(from, to)]);
        self
    }

    pub fn path(mut self, path: Vec<String>) -> Self {
        self.path = Some(path);
        self
    }
}

/// Ordered, append-only sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace(Vec<Step>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step; empty messages are a programming error
    pub fn push(&mut self, step: Step) {
        debug_assert!(!step.message.is_empty(), "trace steps need a message");
        self.0.push(step);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.0.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// Count steps of one kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.0.iter().filter(|s| s.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Step> for Trace {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
