//! Graphstep Core Library
//!
//! Graph editing, search algorithms that record step-by-step traces, text
//! representations of the graph and an animation player for the traces.

pub mod animation;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod session;

pub use error::{GraphError, Result};
pub use graph::{Algorithm, Graph, RepresentationKind, SearchOptions, SearchOutcome};
pub use session::Session;
