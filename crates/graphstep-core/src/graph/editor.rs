//! Graph editing operations
//!
//! These mirror what the canvas lets a user do: place, rename, move and
//! delete vertices, connect them, and attach costs to edges.

use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, EdgeCosts, Graph, Vertex};

fn normalize_label(label: &str) -> Result<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(GraphError::EmptyLabel);
    }
    Ok(trimmed.to_string())
}

impl Graph {
    fn require(&self, label: &str) -> Result<()> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(label))
        }
    }

    /// Add a vertex; the label is trimmed and must be unique
    pub fn add_vertex(&mut self, label: &str, x: f64, y: f64) -> Result<&Vertex> {
        let label = normalize_label(label)?;
        if self.contains(&label) {
            return Err(GraphError::DuplicateVertex { label });
        }
        tracing::debug!(label = %label, x, y, "add_vertex");
        self.vertices.push(Vertex::new(label, x, y));
        Ok(&self.vertices[self.vertices.len() - 1])
    }

    /// Connect two existing vertices
    pub fn add_edge(&mut self, from: &str, to: &str, directed: bool) -> Result<&Edge> {
        self.require(from)?;
        self.require(to)?;
        tracing::debug!(from, to, directed, "add_edge");
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            directed,
        });
        Ok(&self.edges[self.edges.len() - 1])
    }

    /// Remove a vertex together with every edge touching it
    ///
    /// Cost entries that no longer belong to any edge are dropped as well.
    pub fn remove_vertex(&mut self, label: &str) -> Result<Vertex> {
        let index = self
            .position(label)
            .ok_or_else(|| GraphError::vertex_not_found(label))?;
        let removed = self.vertices.remove(index);

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(label));
        tracing::debug!(label, removed_edges = before - self.edges.len(), "remove_vertex");

        self.prune_costs();
        Ok(removed)
    }

    /// Remove the edge at `index` in declaration order
    pub fn remove_edge(&mut self, index: usize) -> Result<Edge> {
        if index >= self.edges.len() {
            crate::bail_invalid!("edge index", index);
        }
        let edge = self.edges.remove(index);
        self.prune_costs();
        Ok(edge)
    }

    /// Rename a vertex, rewriting the edges and cost keys that mention it
    pub fn rename_vertex(&mut self, old: &str, new: &str) -> Result<()> {
        let new = normalize_label(new)?;
        let index = self
            .position(old)
            .ok_or_else(|| GraphError::vertex_not_found(old))?;
        if new == old {
            return Ok(());
        }
        if self.contains(&new) {
            return Err(GraphError::DuplicateVertex { label: new });
        }

        // Costs may be stored for pairs with no edge
        let mut renamed_costs: Vec<(String, String, f64)> = Vec::new();
        for other in self.vertices.iter().map(|v| v.label.as_str()) {
            let other_new = if other == old { new.as_str() } else { other };
            for (key, new_key) in [
                (EdgeCosts::key(old, other), EdgeCosts::key(&new, other_new)),
                (EdgeCosts::key(other, old), EdgeCosts::key(other_new, &new)),
            ] {
                if renamed_costs.iter().any(|(k, _, _)| *k == key) {
                    continue;
                }
                if let Some(cost) = self.edge_costs.get(&key) {
                    renamed_costs.push((key, new_key, cost));
                }
            }
        }
        for (old_key, _, _) in &renamed_costs {
            self.edge_costs.remove(old_key);
        }
        for (_, new_key, cost) in renamed_costs {
            self.edge_costs.insert_key(new_key, cost);
        }

        for edge in &mut self.edges {
            if edge.from == old {
                edge.from = new.clone();
            }
            if edge.to == old {
                edge.to = new.clone();
            }
        }
        self.vertices[index].label = new;
        Ok(())
    }

    /// Move a vertex to a new canvas position
    pub fn move_vertex(&mut self, label: &str, x: f64, y: f64) -> Result<()> {
        let vertex = self
            .vertices
            .iter_mut()
            .find(|v| v.label == label)
            .ok_or_else(|| GraphError::vertex_not_found(label))?;
        vertex.x = x;
        vertex.y = y;
        Ok(())
    }

    /// Set the cost stored under `"from-to"`
    pub fn set_edge_cost(&mut self, from: &str, to: &str, cost: f64) -> Result<()> {
        self.require(from)?;
        self.require(to)?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::NegativeCost {
                key: EdgeCosts::key(from, to),
                cost,
            });
        }
        self.edge_costs.insert(from, to, cost);
        Ok(())
    }

    fn prune_costs(&mut self) {
        let edges = &self.edges;
        self.edge_costs.retain(|key, _| {
            edges.iter().any(|edge| {
                *key == EdgeCosts::key(&edge.from, &edge.to)
                    || *key == EdgeCosts::key(&edge.to, &edge.from)
            })
        });
    }
}
