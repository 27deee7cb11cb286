use std::time::Duration;

use serde::Serialize;

use crate::animation::highlight::HighlightState;
use crate::animation::timer::{Timer, TimerHandle};
use crate::config::DEFAULT_SPEED_MS;
use crate::error::Result;
use crate::graph::trace::{Step, Trace};
use crate::graph::types::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    /// Nothing loaded
    Idle,
    /// Trace loaded, index frozen
    Paused,
    /// Advancing on every timer tick
    Playing,
}

/// Steps through a trace by hand or on a repeating timer
///
/// At most one timer registration is live at any time; every path that
/// schedules a new one cancels the old one first.
#[derive(Debug)]
pub struct Player<T: Timer> {
    timer: T,
    trace: Trace,
    index: usize,
    state: PlayerState,
    speed: Duration,
    handle: Option<TimerHandle>,
}

impl<T: Timer> Player<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            trace: Trace::new(),
            index: 0,
            state: PlayerState::Idle,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            handle: None,
        }
    }

    pub fn with_speed(timer: T, speed_ms: u64) -> Result<Self> {
        let mut player = Self::new(timer);
        player.set_speed(speed_ms)?;
        Ok(player)
    }

    /// Replace the trace and rewind to its first step
    pub fn load(&mut self, trace: Trace) {
        self.stop_timer();
        self.index = 0;
        self.state = if trace.is_empty() {
            PlayerState::Idle
        } else {
            PlayerState::Paused
        };
        tracing::debug!(steps = trace.len(), "trace loaded");
        self.trace = trace;
    }

    /// Advance one step; ignored while playing
    pub fn next(&mut self) -> bool {
        if self.state == PlayerState::Playing {
            return false;
        }
        self.advance()
    }

    /// Go back one step; ignored while playing
    pub fn previous(&mut self) -> bool {
        if self.state == PlayerState::Playing || self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Start auto-advancing, rewinding first if already on the last step
    pub fn play(&mut self) -> bool {
        if self.state != PlayerState::Paused {
            return false;
        }
        if self.is_at_end() {
            self.index = 0;
        }
        self.start_timer();
        self.state = PlayerState::Playing;
        tracing::debug!(index = self.index, speed_ms = self.speed_ms(), "playing");
        true
    }

    pub fn pause(&mut self) {
        if self.state != PlayerState::Playing {
            return;
        }
        self.stop_timer();
        self.state = PlayerState::Paused;
        tracing::debug!(index = self.index, "paused");
    }

    /// Change the tick interval; a running timer is restarted at the new rate
    pub fn set_speed(&mut self, speed_ms: u64) -> Result<()> {
        if speed_ms == 0 {
            crate::bail_invalid!("speed_ms", speed_ms);
        }
        self.speed = Duration::from_millis(speed_ms);
        if self.state == PlayerState::Playing {
            self.start_timer();
        }
        Ok(())
    }

    /// Drop the trace and return to idle
    pub fn clear(&mut self) {
        self.stop_timer();
        self.trace = Trace::new();
        self.index = 0;
        self.state = PlayerState::Idle;
    }

    /// Handle one tick from the timer
    ///
    /// Ticks from a handle that is no longer live are ignored. Returns whether
    /// the index moved.
    pub fn on_tick(&mut self, handle: TimerHandle) -> bool {
        if self.state != PlayerState::Playing || self.handle != Some(handle) {
            tracing::trace!(handle = handle.id(), "ignoring stale tick");
            return false;
        }
        if self.advance() {
            return true;
        }
        self.pause();
        false
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.index)
    }

    /// Visual state of the current step drawn over `graph`
    pub fn highlight(&self, graph: &Graph) -> Option<HighlightState> {
        self.current_step()
            .map(|step| HighlightState::from_step(step, graph))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed.as_millis() as u64
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.trace.len()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        self.handle = Some(self.timer.schedule_repeating(self.speed));
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
        }
    }
}
