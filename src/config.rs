//! Read-only launch settings loaded from `config.toml` in the app folder.
//!
//! The dashboard never writes this file. A missing file means defaults.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use crate::app_dirs;

/// Settings filename inside the `.churnboard` folder.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app folder could not be resolved.
    #[error("Config directory unavailable: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    /// The settings file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`DashboardSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Everything the dashboard can be tuned with at launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardSettings {
    #[serde(default)]
    pub scatter: ScatterSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
}

/// Synthetic engagement/tenure sample shown on the overview tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScatterSettings {
    /// Number of generated bubbles.
    #[serde(default = "default_scatter_points")]
    pub points: usize,
    /// Fixed seed for a reproducible sample; unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            points: default_scatter_points(),
            seed: None,
        }
    }
}

/// Entrance fade timings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnimationSettings {
    #[serde(default = "default_fade_in_delay_ms")]
    pub fade_in_delay_ms: u64,
    #[serde(default = "default_fade_duration_ms")]
    pub fade_duration_ms: u64,
}

impl AnimationSettings {
    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            fade_in_delay_ms: default_fade_in_delay_ms(),
            fade_duration_ms: default_fade_duration_ms(),
        }
    }
}

fn default_scatter_points() -> usize {
    80
}

fn default_fade_in_delay_ms() -> u64 {
    100
}

fn default_fade_duration_ms() -> u64 {
    600
}

/// Path of the settings file, creating the app folder if needed.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app folder, falling back to defaults when absent.
pub fn load_or_default() -> Result<DashboardSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Load settings from an explicit path; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<DashboardSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(DashboardSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
