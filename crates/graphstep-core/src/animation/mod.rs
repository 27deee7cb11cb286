//! Trace playback
//!
//! - `player`: the Idle/Paused/Playing state machine
//! - `timer`: repeating tick source the host event loop drives
//! - `highlight`: per-step vertex and edge colours

pub mod highlight;
pub mod player;
pub mod timer;

pub use highlight::{Highlight, HighlightState, VertexHighlight};
pub use player::{Player, PlayerState};
pub use timer::{ManualTimer, Timer, TimerHandle};
