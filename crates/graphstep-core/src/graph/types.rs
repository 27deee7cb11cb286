use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Cost used for any edge without an entry in the cost table
pub const DEFAULT_EDGE_COST: f64 = 1.0;

/// A vertex on the canvas, identified by its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub label: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Vertex {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    /// Straight-line distance to another vertex
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn default_directed() -> bool {
    true
}

/// An edge between two vertex labels
///
/// Costs are not stored here; see [`EdgeCosts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(default = "default_directed")]
    pub directed: bool,
}

impl Edge {
    pub fn directed(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            directed: true,
        }
    }

    pub fn undirected(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            directed: false,
        }
    }

    /// Whether this edge connects `from` to `to` in the traversal sense
    pub fn connects(&self, from: &str, to: &str) -> bool {
        (self.from == from && self.to == to)
            || (!self.directed && self.from == to && self.to == from)
    }

    pub fn touches(&self, label: &str) -> bool {
        self.from == label || self.to == label
    }
}

/// An ordered `(from, to)` label pair used by trace steps
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRef {
    pub from: String,
    pub to: String,
}

impl EdgeRef {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Edge-cost table keyed by `"from-to"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeCosts(BTreeMap<String, f64>);

impl EdgeCosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(from: &str, to: &str) -> String {
        format!("{}-{}", from, to)
    }

    pub fn insert(&mut self, from: &str, to: &str, cost: f64) {
        self.0.insert(Self::key(from, to), cost);
    }

    pub(crate) fn insert_key(&mut self, key: String, cost: f64) {
        self.0.insert(key, cost);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&String, &mut f64) -> bool) {
        self.0.retain(f)
    }
}

impl<const N: usize> From<[(&str, f64); N]> for EdgeCosts {
    fn from(entries: [(&str, f64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

/// Look up an edge's cost: `"from-to"`, then `"to-from"`, else [`DEFAULT_EDGE_COST`]
pub fn edge_cost(edge: &Edge, costs: &EdgeCosts) -> f64 {
    costs
        .get(&EdgeCosts::key(&edge.from, &edge.to))
        .or_else(|| costs.get(&EdgeCosts::key(&edge.to, &edge.from)))
        .unwrap_or(DEFAULT_EDGE_COST)
}

/// A graph as drawn by the user
///
/// Algorithms borrow it immutably for the duration of one run; that borrow
/// is the snapshot they work on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    #[serde(default)]
    pub(crate) vertices: Vec<Vertex>,
    #[serde(default)]
    pub(crate) edges: Vec<Edge>,
    #[serde(default)]
    pub(crate) edge_costs: EdgeCosts,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from raw parts and check it
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>, edge_costs: EdgeCosts) -> Result<Self> {
        let graph = Self {
            vertices,
            edges,
            edge_costs,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Parse a JSON snapshot and check it
    pub fn from_json(text: &str) -> Result<Self> {
        let graph: Graph = serde_json::from_str(text)?;
        graph.validate()?;
        Ok(graph)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_costs(&self) -> &EdgeCosts {
        &self.edge_costs
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.vertex(label).is_some()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn cost_of(&self, edge: &Edge) -> f64 {
        edge_cost(edge, &self.edge_costs)
    }

    /// Check the structural invariants every algorithm relies on
    ///
    /// Labels are unique and non-empty, every edge endpoint names a vertex,
    /// and every cost is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            if vertex.label.trim().is_empty() {
                return Err(GraphError::EmptyLabel);
            }
            if !seen.insert(vertex.label.as_str()) {
                return Err(GraphError::DuplicateVertex {
                    label: vertex.label.clone(),
                });
            }
        }

        for (index, edge) in self.edges.iter().enumerate() {
            for label in [&edge.from, &edge.to] {
                if !seen.contains(label.as_str()) {
                    return Err(GraphError::DanglingEdge {
                        index,
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        label: label.clone(),
                    });
                }
            }
        }

        for (key, cost) in self.edge_costs.iter() {
            if !cost.is_finite() || cost < 0.0 {
                return Err(GraphError::NegativeCost {
                    key: key.to_string(),
                    cost,
                });
            }
        }

        Ok(())
    }
}
