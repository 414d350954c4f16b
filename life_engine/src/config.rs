//! Simulation settings loaded from TOML, with defaults for every field.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between generations when auto-running.
    pub interval_ms: u64,
    /// Generations the command-line runner iterates.
    pub generations: usize,
    /// Name of a seed pattern from [`patterns::PATTERNS`].
    pub pattern: Option<String>,
    /// Seed for a random board; ignored when `pattern` is set.
    pub seed: Option<u32>,
    pub stop_on_cycle: bool,
    pub log_level: String,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 30,
            interval_ms: 200,
            generations: 31,
            pattern: None,
            seed: None,
            stop_on_cycle: true,
            log_level: "info".to_string(),
        }
    }
}

impl LifeConfig {
    /// Reads and validates `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let txt = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&txt)
    }

    pub fn from_toml_str(txt: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(txt)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("interval_ms must be positive".to_string()));
        }
        if let Some(name) = &self.pattern {
            if patterns::find(name).is_none() {
                return Err(ConfigError::Invalid(format!("unknown pattern {name:?}")));
            }
        }
        Ok(())
    }

    pub fn seed_pattern(&self) -> Option<&'static Pattern> {
        self.pattern.as_deref().and_then(patterns::find)
    }
}
