//! Graphstep - step-by-step graph search visualizer
//!
//! Runs BFS, DFS, Dijkstra and A* on a graph snapshot, prints or replays the
//! recorded steps, and renders adjacency and incidence views of the graph.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphstep_core::error::{ExitCode as GraphExitCode, GraphError};
use graphstep_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if argv_format_json {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match commands::dispatch::load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report(&cli, cli.format.unwrap_or_default(), e),
    };
    let format = cli.format.unwrap_or(config.output.format);

    match commands::dispatch::run(&cli, config, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report(&cli, format, e),
    }
}

fn report(cli: &Cli, format: OutputFormat, e: GraphError) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

/// `--format json` as seen in raw argv, for clap errors
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
