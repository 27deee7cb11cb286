use crate::graph::types::{Edge, Graph, Vertex};

/// A neighbor reached over one edge, with that edge's cost
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub vertex: &'a Vertex,
    pub edge: &'a Edge,
    pub cost: f64,
}

/// Trait for providing graph adjacency and vertex lookup to the algorithms
pub trait GraphProvider {
    fn vertex(&self, label: &str) -> Option<&Vertex>;

    /// All vertex labels in insertion order
    fn vertex_labels(&self) -> Vec<&str>;

    /// Neighbors of `label` in edge declaration order
    ///
    /// A vertex is reached from `label` if `label` is the edge's `from`, or
    /// the edge's `to` on an undirected edge. Order determines BFS/DFS
    /// traversal order and must be stable.
    fn neighbors(&self, label: &str) -> Vec<Neighbor<'_>>;
}

impl GraphProvider for Graph {
    fn vertex(&self, label: &str) -> Option<&Vertex> {
        Graph::vertex(self, label)
    }

    fn vertex_labels(&self) -> Vec<&str> {
        self.vertices().iter().map(|v| v.label.as_str()).collect()
    }

    fn neighbors(&self, label: &str) -> Vec<Neighbor<'_>> {
        let mut neighbors = Vec::new();
        for edge in self.edges() {
            let target = if edge.from == label {
                Some(&edge.to)
            } else if edge.to == label && !edge.directed {
                Some(&edge.from)
            } else {
                None
            };

            // Endpoints are checked by Graph::validate before any run
            if let Some(vertex) = target.and_then(|t| Graph::vertex(self, t)) {
                neighbors.push(Neighbor {
                    vertex,
                    edge,
                    cost: self.cost_of(edge),
                });
            }
        }
        neighbors
    }
}
