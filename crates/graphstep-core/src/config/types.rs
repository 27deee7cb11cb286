//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// Default animation interval in milliseconds
pub const DEFAULT_SPEED_MS: u64 = 1000;

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Playback settings
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Search preconditions
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Playback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Interval between automatic steps
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

fn default_speed_ms() -> u64 {
    DEFAULT_SPEED_MS
}

/// Search preconditions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Accept searches whose start and end vertex are the same
    #[serde(default)]
    pub allow_same_endpoints: bool,
}

/// Output defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
