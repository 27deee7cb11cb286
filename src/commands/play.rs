//! `graphstep play` command - replay a search one step per tick
//!
//! The player runs on a [`ManualTimer`]; this loop sleeps for the scheduled
//! interval and delivers each tick itself. Ctrl-C pauses playback and reports
//! the step it stopped on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde_json::json;
use tracing::debug;

use crate::cli::{OutputFormat, PlayArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    human_step_line, outcome_record, print_records_header, step_record,
};
use graphstep_core::animation::{ManualTimer, PlayerState};
use graphstep_core::error::{GraphError, Result};
use graphstep_core::format::format_cost;
use graphstep_core::graph::SearchOutcome;
use graphstep_core::session::Session;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Execute the play command
pub fn execute(ctx: &CommandContext, args: &PlayArgs) -> Result<()> {
    let graph = ctx.read_graph(&args.graph)?;

    let mut session = Session::with_config(ManualTimer::new(), &ctx.config)?;
    session.set_options(ctx.search_options(args.allow_same));
    if let Some(speed_ms) = args.speed {
        session.player_mut().set_speed(speed_ms)?;
    }
    session.replace_graph(graph)?;

    let outcome = session.run(args.algorithm, &args.from, &args.to)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .map_err(|e| GraphError::Other(format!("failed to install Ctrl-C handler: {}", e)))?;

    let format = ctx.format();
    print_header(ctx, &outcome, session.player().speed_ms(), format);
    emit_step(&session, format)?;

    session.player_mut().play();
    while session.player().state() == PlayerState::Playing {
        let Some((handle, interval)) = session.player().timer().active() else {
            break;
        };
        if !wait(interval, &interrupted) {
            session.player_mut().pause();
            break;
        }
        if session.player_mut().on_tick(handle) {
            emit_step(&session, format)?;
        }
    }

    let was_interrupted = interrupted.load(Ordering::SeqCst);
    debug!(
        index = session.player().index(),
        interrupted = was_interrupted,
        elapsed = ?ctx.start.elapsed(),
        "play"
    );

    print_summary(ctx, &session, &outcome, was_interrupted, format)
}

/// Sleep for `interval`; false if interrupted first
fn wait(interval: Duration, interrupted: &AtomicBool) -> bool {
    let deadline = Instant::now() + interval;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

fn print_header(ctx: &CommandContext, outcome: &SearchOutcome, speed_ms: u64, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} from {} to {} ({} steps, {} ms per step)",
                    outcome.algorithm.display_name(),
                    outcome.start,
                    outcome.end,
                    outcome.trace.len(),
                    speed_ms
                );
            }
        }
        OutputFormat::Records => {
            let steps = outcome.trace.len().to_string();
            let speed = speed_ms.to_string();
            print_records_header(
                "play",
                &[
                    ("algorithm", outcome.algorithm.id()),
                    ("from", outcome.start.as_str()),
                    ("to", outcome.end.as_str()),
                    ("steps", steps.as_str()),
                    ("speed_ms", speed.as_str()),
                ],
            );
        }
        OutputFormat::Json => {}
    }
}

/// Print the player's current step; JSON mode writes one object per line
fn emit_step(session: &Session<ManualTimer>, format: OutputFormat) -> Result<()> {
    let player = session.player();
    let Some(step) = player.current_step() else {
        return Ok(());
    };
    let number = player.index() + 1;

    crate::output_by_format_result!(format,
        json => {
            let line = json!({
                "index": player.index(),
                "step": step,
                "highlight": session.highlight(),
            });
            println!("{}", serde_json::to_string(&line)?);
            Ok(())
        },
        human => { println!("{}", human_step_line(number, step)) },
        records => { println!("{}", step_record(number, step)) }
    )
}

fn print_summary(
    ctx: &CommandContext,
    session: &Session<ManualTimer>,
    outcome: &SearchOutcome,
    interrupted: bool,
    format: OutputFormat,
) -> Result<()> {
    let player = session.player();

    crate::output_by_format_result!(format,
        json => {
            let line = json!({
                "done": !interrupted,
                "interrupted": interrupted,
                "index": player.index(),
                "steps": player.len(),
                "reachable": outcome.reachable,
                "path": outcome.path,
                "cost": outcome.cost,
            });
            println!("{}", serde_json::to_string(&line)?);
            Ok(())
        },
        human => {
            if interrupted {
                println!("Paused at step {} of {}", player.index() + 1, player.len());
            } else if let Some(path) = &outcome.path {
                let cost = outcome.cost.map(format_cost).unwrap_or_else(|| "-".to_string());
                println!("Path: {} (cost {})", path.join(" -> "), cost);
            } else if !ctx.cli.quiet {
                println!("No path from {} to {}", outcome.start, outcome.end);
            }
        },
        records => {
            if interrupted {
                println!("I index={} steps={}", player.index() + 1, player.len());
            }
            println!("{}", outcome_record(outcome));
        }
    )
}
