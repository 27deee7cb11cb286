//! Command implementations for graphstep

pub mod algorithms;
pub mod dispatch;
pub mod format;
pub mod play;
pub mod repr;
pub mod search;
pub mod validate;
