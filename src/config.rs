use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration metadata
    pub metadata: ConfigMetadata,

    /// General application settings
    pub settings: AppSettings,

    /// Logging configuration
    pub log: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory holding the people store
    pub data_dir: PathBuf,

    /// Chart rendering defaults
    pub chart: ChartSettings,
}

/// Chart rendering defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            width: 900,
            height: 480,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();
        AppConfig {
            metadata: ConfigMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: now,
                updated_at: now,
            },
            settings: AppSettings {
                data_dir: dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("vitalrs"),
                chart: ChartSettings::default(),
            },
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default config file location under the platform config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitalrs")
            .join("config.toml")
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Write the config, creating parent directories and bumping the
    /// updated-at timestamp
    pub fn save(&mut self, path: &PathBuf) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Path of the people store under the configured data directory
    pub fn people_path(&self) -> PathBuf {
        self.settings.data_dir.join("people.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.metadata.version, env!("CARGO_PKG_VERSION"));
        assert!(config.settings.data_dir.ends_with("vitalrs"));
        assert_eq!(config.settings.chart.width, 900);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.settings.chart.height, 480);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.settings.chart.width = 1200;
        config.save(&path).unwrap();

        let reloaded = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(reloaded.settings.chart.width, 1200);
        assert_eq!(reloaded.settings.data_dir, config.settings.data_dir);
    }

    #[test]
    fn test_save_bumps_updated_at() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        let created = config.metadata.updated_at;
        config.save(&path).unwrap();
        assert!(config.metadata.updated_at >= created);
    }

    #[test]
    fn test_people_path_under_data_dir() {
        let config = AppConfig::default();
        assert!(config.people_path().ends_with("people.json"));
    }
}
