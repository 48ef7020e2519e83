//! User settings and preferences
//!
//! Manages application settings stored in ~/.employee-tracker/config.toml

use crate::config::ConnectionConfig;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Widest a rendered table cell may be before it is truncated
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,

    /// Print "(N rows)" under each table
    #[serde(default = "default_true")]
    pub show_row_count: bool,
}

fn default_max_cell_width() -> usize {
    40
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_cell_width: default_max_cell_width(),
            show_row_count: default_true(),
        }
    }
}

/// Load settings from config file
pub fn load_settings() -> ConfigResult<Settings> {
    let path = ConnectionConfig::config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| ConfigError::NotFound(format!("Failed to read settings file: {}", e)))?;
    parse_settings(&content)
}

fn parse_settings(content: &str) -> ConfigResult<Settings> {
    let settings: Settings = toml::from_str(content)?;
    if settings.max_cell_width < 4 {
        return Err(ConfigError::Invalid(
            "max_cell_width must be at least 4".to_string(),
        ));
    }
    Ok(settings)
}
