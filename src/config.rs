//! Configuration management for the demo host
//!
//! This module handles loading, parsing, and validation of the host
//! configuration file: the argument payload handed to the widget, the
//! frame geometry, and logging.

use crate::constants::{CELL_HEIGHT_MAX, CELL_HEIGHT_MIN, CONFIG_GENERATED, DEFAULT_CELL_HEIGHT};
use crate::host::WidgetArgs;
use crate::theme::ThemeTokens;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HostConfig {
    pub widget: WidgetConfig,
    pub frame: FrameConfig,
    /// Theme tokens forwarded to the widget; absent tokens resolve to the
    /// built-in palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeTokens>,
    pub logging: LoggingConfig,
}

/// Widget arguments supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WidgetConfig {
    /// Label rendered above the entry field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Initial value handed to the widget, e.g. "02:30 pm"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Render the field non-interactive
    pub disabled: bool,
}

/// Frame geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Pixel height of one terminal row, used to translate between the
    /// widget's rendered rows and the host frame's pixel heights
    pub cell_height: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl HostConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: HostConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("timedock.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("timedock").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(CELL_HEIGHT_MIN..=CELL_HEIGHT_MAX).contains(&self.frame.cell_height) {
            anyhow::bail!(
                "cell_height must be between {} and {} pixels, got {}",
                CELL_HEIGHT_MIN,
                CELL_HEIGHT_MAX,
                self.frame.cell_height
            );
        }

        // An unparseable widget default is valid configuration: the widget
        // silently treats it as no selection.

        Ok(())
    }

    /// The argument payload the host hands the widget.
    #[must_use]
    pub fn widget_args(&self) -> WidgetArgs {
        WidgetArgs {
            label: self.widget.label.clone(),
            default: self.widget.default.clone(),
            disabled: self.widget.disabled,
            theme: self.theme.clone(),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Timedock Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("timedock"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
