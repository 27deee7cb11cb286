//! Textual graph representations
//!
//! Adjacency list, adjacency matrix and incidence matrix. Row and column
//! order always follow vertex and edge declaration order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::types::Graph;

/// Which representation to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepresentationKind {
    List,
    AdjacencyMatrix,
    IncidenceMatrix,
}

impl RepresentationKind {
    pub const ALL: [RepresentationKind; 3] = [
        RepresentationKind::List,
        RepresentationKind::AdjacencyMatrix,
        RepresentationKind::IncidenceMatrix,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RepresentationKind::List => "list",
            RepresentationKind::AdjacencyMatrix => "adjacency-matrix",
            RepresentationKind::IncidenceMatrix => "incidence-matrix",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RepresentationKind::List => "Adjacency List",
            RepresentationKind::AdjacencyMatrix => "Adjacency Matrix",
            RepresentationKind::IncidenceMatrix => "Incidence Matrix",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RepresentationKind::List => {
                "Each vertex points to the list of its neighbors; undirected edges appear on both sides."
            }
            RepresentationKind::AdjacencyMatrix => {
                "A vertex-by-vertex table where 1 marks a connection from the row to the column and 0 its absence."
            }
            RepresentationKind::IncidenceMatrix => {
                "Relates vertices (rows) to edges (columns): -1 leaves the source of a directed edge, +1 enters its target, and both endpoints of an undirected edge get +1."
            }
        }
    }
}

impl FromStr for RepresentationKind {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" | "adjacency-list" => Ok(RepresentationKind::List),
            "adjacency-matrix" | "matrix" => Ok(RepresentationKind::AdjacencyMatrix),
            "incidence-matrix" | "incidence" => Ok(RepresentationKind::IncidenceMatrix),
            other => Err(GraphError::UnknownRepresentation(other.to_string())),
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Render the requested representation as text
#[tracing::instrument(skip(graph), fields(vertices = graph.vertices().len(), edges = graph.edges().len()))]
pub fn generate_representation(kind: RepresentationKind, graph: &Graph) -> Result<String> {
    graph.validate()?;
    let text = match kind {
        RepresentationKind::List => adjacency_list(graph),
        RepresentationKind::AdjacencyMatrix => AdjacencyMatrix::build(graph).to_string(),
        RepresentationKind::IncidenceMatrix => IncidenceMatrix::build(graph).to_string(),
    };
    Ok(text)
}

/// `label -> n1, n2` per vertex, neighbors in edge declaration order
pub fn adjacency_list(graph: &Graph) -> String {
    let mut lists: Vec<Vec<&str>> = vec![Vec::new(); graph.vertices().len()];
    for edge in graph.edges() {
        if let (Some(i), Some(j)) = (graph.position(&edge.from), graph.position(&edge.to)) {
            lists[i].push(&edge.to);
            if !edge.directed {
                lists[j].push(&edge.from);
            }
        }
    }

    let mut out = String::new();
    for (vertex, neighbors) in graph.vertices().iter().zip(lists) {
        let line = format!("{} -> {}", vertex.label, neighbors.join(", "));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// N×N 0/1 matrix; `cells[i][j] == 1` when an edge leads from vertex i to vertex j
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    pub labels: Vec<String>,
    pub cells: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    pub fn build(graph: &Graph) -> Self {
        let labels: Vec<String> = graph.vertices().iter().map(|v| v.label.clone()).collect();
        let n = labels.len();
        let mut cells = vec![vec![0u8; n]; n];

        for edge in graph.edges() {
            if let (Some(i), Some(j)) = (graph.position(&edge.from), graph.position(&edge.to)) {
                cells[i][j] = 1;
                if !edge.directed {
                    cells[j][i] = 1;
                }
            }
        }

        Self { labels, cells }
    }

    /// Ordered `(row, column)` label pairs whose cell is 1
    pub fn edge_pairs(&self) -> BTreeSet<(String, String)> {
        let mut pairs = BTreeSet::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if *cell == 1 {
                    pairs.insert((self.labels[i].clone(), self.labels[j].clone()));
                }
            }
        }
        pairs
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<Vec<i8>> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|c| *c as i8).collect())
            .collect();
        f.write_str(&format_matrix(
            &self.labels,
            &self.labels,
            &values,
            RepresentationKind::AdjacencyMatrix.title(),
        ))
    }
}

/// N×M matrix of vertices by edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidenceMatrix {
    pub vertex_labels: Vec<String>,
    pub edge_labels: Vec<String>,
    pub cells: Vec<Vec<i8>>,
}

impl IncidenceMatrix {
    pub fn build(graph: &Graph) -> Self {
        let vertex_labels: Vec<String> =
            graph.vertices().iter().map(|v| v.label.clone()).collect();
        let edge_labels: Vec<String> = (1..=graph.edges().len())
            .map(|i| format!("E{}", i))
            .collect();
        let mut cells = vec![vec![0i8; edge_labels.len()]; vertex_labels.len()];

        for (column, edge) in graph.edges().iter().enumerate() {
            if let (Some(i), Some(j)) = (graph.position(&edge.from), graph.position(&edge.to)) {
                if edge.directed {
                    cells[i][column] = -1;
                    cells[j][column] = 1;
                } else {
                    cells[i][column] = 1;
                    cells[j][column] = 1;
                }
            }
        }

        Self {
            vertex_labels,
            edge_labels,
            cells,
        }
    }
}

impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_matrix(
            &self.vertex_labels,
            &self.edge_labels,
            &self.cells,
            RepresentationKind::IncidenceMatrix.title(),
        ))
    }
}

/// Format a numeric matrix as an aligned table
///
/// Row labels are left-aligned and padded to the longest row label plus two.
/// Columns are right-aligned to the widest column label or value (at least
/// three) plus two.
pub fn format_matrix(
    row_labels: &[String],
    column_labels: &[String],
    cells: &[Vec<i8>],
    title: &str,
) -> String {
    let row_width = row_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let longest_column = column_labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let longest_value = cells
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0);
    let column_width = longest_column.max(longest_value).max(3) + 2;

    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(title);
        out.push_str("\n\n");
    }

    out.push_str(&" ".repeat(row_width));
    for label in column_labels {
        out.push_str(&format!("{:>width$}", label, width = column_width));
    }
    out.push('\n');

    for (label, row) in row_labels.iter().zip(cells) {
        out.push_str(&format!("{:<width$}", label, width = row_width));
        for value in row {
            out.push_str(&format!("{:>width$}", value, width = column_width));
        }
        out.push('\n');
    }

    out
}
