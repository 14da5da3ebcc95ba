//! # Picker Configuration
//!
//! Optional `config.yaml` in the platform config directory. Every field has a
//! default, so a missing or partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::kind::PickerKind;

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Input mode of the time dialog. Display text is always 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockFormat {
    #[default]
    H24,
    H12,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub clock_format: ClockFormat,
    pub time_title: String,
    pub date_title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            clock_format: ClockFormat::default(),
            time_title: PickerKind::Time.default_title().to_string(),
            date_title: PickerKind::Date.default_title().to_string(),
            window_width: 480.0,
            window_height: 360.0,
        }
    }
}

impl PickerConfig {
    /// Default location, e.g. `~/.config/material-picker/config.yaml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "example", "material-picker")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults on any failure
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("No config directory available, using default picker config");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: PickerConfig = serde_yaml::from_str(&contents)?;
        info!("Loaded picker config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn title(&self, kind: PickerKind) -> &str {
        match kind {
            PickerKind::Time => &self.time_title,
            PickerKind::Date => &self.date_title,
        }
    }
}
