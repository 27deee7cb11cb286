//! Command trait and context for dispatching commands

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphstep_core::config::GlobalConfig;
use graphstep_core::error::{GraphError, Result};
use graphstep_core::graph::{Graph, SearchOptions};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GlobalConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GlobalConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` if given, otherwise the config file's default
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    /// Search options from the config, widened by `--allow-same`
    pub fn search_options(&self, allow_same: bool) -> SearchOptions {
        SearchOptions {
            allow_same_endpoints: allow_same || self.config.search.allow_same_endpoints,
        }
    }

    /// Read and validate a graph snapshot; `-` reads stdin
    pub fn read_graph(&self, path: &Path) -> Result<Graph> {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                GraphError::Other(format!("failed to read graph from stdin: {}", e))
            })?;
            buf
        } else {
            fs::read_to_string(path).map_err(|e| {
                GraphError::Other(format!(
                    "failed to read graph from {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        if text.trim().is_empty() {
            graphstep_core::bail_usage!(format!("no graph given in {}", path.display()));
        }

        let graph = Graph::from_json(&text)?;
        tracing::debug!(
            vertices = graph.vertices().len(),
            edges = graph.edges().len(),
            elapsed = ?self.start.elapsed(),
            "read_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphstep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step BFS, DFS, Dijkstra and A* on your own graphs.");
        println!();
        println!("Run `graphstep --help` for usage information.");
        Ok(())
    }
}
