//! Graph model, search algorithms and text representations
//!
//! - `types`: vertices, edges, the edge-cost table and the owning [`Graph`]
//! - `editor`: the edits a user makes on the canvas
//! - `traversal`: neighbor lookup shared by every algorithm
//! - `queue`: stable min-priority queue for Dijkstra and A*
//! - `trace`: the step records an algorithm run produces
//! - `algos`: BFS, DFS, Dijkstra and A*
//! - `repr`: adjacency list, adjacency matrix and incidence matrix text

pub mod algos;
pub mod editor;
pub mod queue;
pub mod repr;
pub mod trace;
pub mod traversal;
pub mod types;

pub use algos::{run_search, Algorithm, SearchOptions, SearchOutcome};
pub use queue::PriorityQueue;
pub use repr::{generate_representation, AdjacencyMatrix, IncidenceMatrix, RepresentationKind};
pub use trace::{Step, StepKind, Trace};
pub use traversal::{GraphProvider, Neighbor};
pub use types::{edge_cost, Edge, EdgeCosts, EdgeRef, Graph, Vertex, DEFAULT_EDGE_COST};
