//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving generation presets
//! in TOML format with platform-specific directory resolution. Presets are
//! the unit of configuration: each one names an output file, a set of
//! source controllers, and the formatting rules to apply.

use crate::formatter::{Casing, Delimiter, FormattingConfig};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "ANIMHASH_CONFIG_DIR";

/// Where a preset finds its controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControllerSource {
    /// Recursively scan a folder for `.controller` files
    Folder {
        /// Folder to scan
        path: PathBuf,
    },
    /// An explicit list of controller files, used in the order given
    Controllers {
        /// Controller file paths
        paths: Vec<PathBuf>,
    },
}

impl Default for ControllerSource {
    fn default() -> Self {
        ControllerSource::Controllers { paths: Vec::new() }
    }
}

/// A named generation preset.
///
/// Mirrors everything the generate command needs: where the controllers
/// come from, where the file goes, and how identifiers are formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset name (unique within the config)
    pub name: String,
    /// Output path for the generated `.cs` file
    pub save_path: PathBuf,
    /// Name of the generated static class
    pub class_name: String,
    /// Whether to emit the nested Layers class
    #[serde(default)]
    pub include_layers: bool,
    /// Casing for layer identifiers
    #[serde(default)]
    pub layer_casing: Casing,
    /// Delimiter for layer identifiers
    #[serde(default)]
    pub layer_delimiter: Delimiter,
    /// Controller source
    #[serde(default)]
    pub source: ControllerSource,
    /// Formatting rules for parameter identifiers
    #[serde(default)]
    pub formatting: FormattingConfig,
}

impl Preset {
    /// Creates a preset with the given name and empty settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            save_path: PathBuf::new(),
            class_name: "AnimHashIDs".to_string(),
            include_layers: false,
            layer_casing: Casing::None,
            layer_delimiter: Delimiter::None,
            source: ControllerSource::default(),
            formatting: FormattingConfig::default(),
        }
    }
}

/// Application configuration: the preset list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generation presets
    #[serde(default, rename = "preset")]
    pub presets: Vec<Preset>,
}

impl Config {
    /// Creates a new Config with a single default preset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            presets: vec![Preset::new("Default")],
        }
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// Honors `ANIMHASH_CONFIG_DIR` when set (test isolation), otherwise:
    /// - Linux: `~/.config/animhash/`
    /// - macOS: `~/Library/Application Support/animhash/`
    /// - Windows: `%APPDATA%\animhash\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("animhash");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
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
    /// Preset names must be non-empty and unique; at least one preset must
    /// exist so the generate command always has a target to resolve.
    pub fn validate(&self) -> Result<()> {
        if self.presets.is_empty() {
            bail!("Configuration must contain at least one preset");
        }

        let mut seen = std::collections::HashSet::new();
        for preset in &self.presets {
            if preset.name.trim().is_empty() {
                bail!("Preset names must not be empty");
            }
            if !seen.insert(preset.name.as_str()) {
                bail!("Duplicate preset name: '{}'", preset.name);
            }
        }

        Ok(())
    }

    /// Finds a preset by name.
    #[must_use]
    pub fn find_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Adds a preset, rejecting duplicate names.
    pub fn add_preset(&mut self, preset: Preset) -> Result<()> {
        if self.find_preset(&preset.name).is_some() {
            bail!("A preset named '{}' already exists", preset.name);
        }
        self.presets.push(preset);
        Ok(())
    }

    /// Removes a preset by name.
    ///
    /// Removing the last remaining preset is rejected so the config always
    /// has a usable default.
    pub fn remove_preset(&mut self, name: &str) -> Result<Preset> {
        if self.presets.len() == 1 {
            bail!("Cannot remove the last remaining preset");
        }

        let index = self
            .presets
            .iter()
            .position(|p| p.name == name)
            .with_context(|| format!("No preset named '{name}'"))?;

        Ok(self.presets.remove(index))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
