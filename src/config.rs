use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "dotgrid.json";

const DEFAULT_CELL_SIZE: u32 = 20;
const DEFAULT_VIEWPORT_WIDTH: u32 = 640;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 480;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cell_size must be greater than zero")]
    ZeroCellSize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cell_size: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Redraw every frame instead of only on state-changing clicks.
    pub continuous_redraw: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            continuous_redraw: false,
        }
    }
}

impl Config {
    /// Loads the config file if present; a missing file means defaults,
    /// a malformed or invalid file is a startup error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(self)
    }
}
