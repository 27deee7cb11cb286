//! Editing session: one graph, one player, one set of search options
//!
//! Every edit to the graph invalidates the loaded trace, so the session
//! clears the player whenever the graph changes.

use crate::animation::{HighlightState, Player, Timer};
use crate::config::GlobalConfig;
use crate::error::Result;
use crate::graph::{
    generate_representation, run_search, Algorithm, Graph, RepresentationKind, SearchOptions,
    SearchOutcome,
};

#[derive(Debug)]
pub struct Session<T: Timer> {
    graph: Graph,
    player: Player<T>,
    options: SearchOptions,
}

impl<T: Timer> Session<T> {
    pub fn new(timer: T) -> Self {
        Self {
            graph: Graph::new(),
            player: Player::new(timer),
            options: SearchOptions::default(),
        }
    }

    /// Session configured from the `[animation]` and `[search]` tables
    pub fn with_config(timer: T, config: &GlobalConfig) -> Result<Self> {
        Ok(Self {
            graph: Graph::new(),
            player: Player::with_speed(timer, config.animation.speed_ms)?,
            options: SearchOptions {
                allow_same_endpoints: config.search.allow_same_endpoints,
            },
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn player(&self) -> &Player<T> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<T> {
        &mut self.player
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Swap in a whole new graph after checking it
    pub fn replace_graph(&mut self, graph: Graph) -> Result<()> {
        graph.validate()?;
        self.graph = graph;
        self.player.clear();
        Ok(())
    }

    pub fn add_vertex(&mut self, label: &str, x: f64, y: f64) -> Result<()> {
        self.edit(|g| g.add_vertex(label, x, y).map(|_| ()))
    }

    pub fn add_edge(&mut self, from: &str, to: &str, directed: bool) -> Result<()> {
        self.edit(|g| g.add_edge(from, to, directed).map(|_| ()))
    }

    pub fn remove_vertex(&mut self, label: &str) -> Result<()> {
        self.edit(|g| g.remove_vertex(label).map(|_| ()))
    }

    pub fn remove_edge(&mut self, index: usize) -> Result<()> {
        self.edit(|g| g.remove_edge(index).map(|_| ()))
    }

    pub fn rename_vertex(&mut self, old: &str, new: &str) -> Result<()> {
        self.edit(|g| g.rename_vertex(old, new))
    }

    pub fn move_vertex(&mut self, label: &str, x: f64, y: f64) -> Result<()> {
        self.edit(|g| g.move_vertex(label, x, y))
    }

    pub fn set_edge_cost(&mut self, from: &str, to: &str, cost: f64) -> Result<()> {
        self.edit(|g| g.set_edge_cost(from, to, cost))
    }

    /// Remove all highlights and drop the loaded trace
    pub fn clear_highlights(&mut self) {
        self.player.clear();
    }

    /// Run a search on the current graph and load its trace into the player
    pub fn run(&mut self, algorithm: Algorithm, start: &str, end: &str) -> Result<SearchOutcome> {
        let outcome = run_search(algorithm, &self.graph, start, end, &self.options)?;
        self.player.load(outcome.trace.clone());
        Ok(outcome)
    }

    pub fn representation(&self, kind: RepresentationKind) -> Result<String> {
        generate_representation(kind, &self.graph)
    }

    /// Highlights for the player's current step
    pub fn highlight(&self) -> Option<HighlightState> {
        self.player.highlight(&self.graph)
    }

    /// Apply an edit; the trace is dropped only when the edit succeeds
    fn edit(&mut self, f: impl FnOnce(&mut Graph) -> Result<()>) -> Result<()> {
        f(&mut self.graph)?;
        self.player.clear();
        Ok(())
    }
}
