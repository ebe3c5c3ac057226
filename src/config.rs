//! Configuration management for the application.
//!
//! This module handles loading and saving application settings in TOML format
//! with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_FIXED_FILE, DEFAULT_WARDROBE_FILE};

/// Data file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Wardrobe data document (articles and outfit history)
    #[serde(default = "default_wardrobe_file")]
    pub wardrobe_file: PathBuf,
    /// Fixed configuration document (types, colors, palettes)
    #[serde(default = "default_fixed_file")]
    pub fixed_file: PathBuf,
}

fn default_wardrobe_file() -> PathBuf {
    PathBuf::from(DEFAULT_WARDROBE_FILE)
}

fn default_fixed_file() -> PathBuf {
    PathBuf::from(DEFAULT_FIXED_FILE)
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            wardrobe_file: default_wardrobe_file(),
            fixed_file: default_fixed_file(),
        }
    }
}

/// Outfit generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fixed RNG seed; unset means a fresh seed per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Wardrobe/config.toml`
/// - macOS: `~/Library/Application Support/Wardrobe/config.toml`
/// - Windows: `%APPDATA%\Wardrobe\config.toml`
///
/// The directory can be replaced wholesale with the `WARDROBE_CONFIG_DIR`
/// environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `WARDROBE_CONFIG_DIR` wins when set and non-empty; otherwise the
    /// platform config directory is used.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Both data paths must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.paths.wardrobe_file.as_os_str().is_empty() {
            anyhow::bail!("paths.wardrobe_file must not be empty");
        }
        if self.paths.fixed_file.as_os_str().is_empty() {
            anyhow::bail!("paths.fixed_file must not be empty");
        }
        Ok(())
    }
}
