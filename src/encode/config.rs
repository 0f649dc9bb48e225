use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use geoencode::models::RingClosure;

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    #[serde(default)]
    pub ring_closure: RingClosure,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ring_closure: RingClosure::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Command-line flags win over file values
    pub fn apply_overrides(&mut self, close_rings: bool, log_level: Option<&str>) {
        if close_rings {
            self.run.ring_closure = RingClosure::Close;
        }
        if let Some(level) = log_level {
            self.run.log_level = level.to_string();
        }
    }
}
