//! Configuration for graphstep
//!
//! Configuration is read from `~/.config/graphstep/config.toml` unless
//! `GRAPHSTEP_CONFIG_DIR` or an explicit path overrides it. A missing file
//! yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{AnimationConfig, GlobalConfig, OutputConfig, SearchConfig, DEFAULT_SPEED_MS};

const CONFIG_DIR: &str = "graphstep";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHSTEP_CONFIG_DIR";

impl GlobalConfig {
    /// Location of the default config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: GlobalConfig =
            toml::from_str(&content).map_err(|source| GraphError::Toml {
                path: path.display().to_string(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.animation.speed_ms == 0 {
            crate::bail_invalid!("animation.speed_ms", 0);
        }
        Ok(())
    }
}
