//! Configuration file support for scribblepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scribblepad/config.toml`. Settings include pen defaults,
//! background color, label font and the optional history cap.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, HistoryConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// pen_width = 3.0
/// pen_color = "black"
/// background_color = "white"
/// label_font_size = 100.0
///
/// [history]
/// max_steps = 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen, background and label defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `pen_width`: 0.5 - 100.0 (non-finite values reset to the default)
    /// - `label_font_size`: 8.0 - 400.0
    /// - `font_weight`: named weight or 100 - 900
    /// - `font_style`: normal, italic, oblique
    fn validate_and_clamp(&mut self) {
        if !self.drawing.pen_width.is_finite() {
            log::warn!(
                "Invalid pen_width {}, falling back to 3.0",
                self.drawing.pen_width
            );
            self.drawing.pen_width = 3.0;
        } else if !(0.5..=100.0).contains(&self.drawing.pen_width) {
            log::warn!(
                "Invalid pen_width {:.1}, clamping to 0.5-100.0 range",
                self.drawing.pen_width
            );
            self.drawing.pen_width = self.drawing.pen_width.clamp(0.5, 100.0);
        }

        if !self.drawing.label_font_size.is_finite() {
            log::warn!(
                "Invalid label_font_size {}, falling back to 100.0",
                self.drawing.label_font_size
            );
            self.drawing.label_font_size = 100.0;
        } else if !(8.0..=400.0).contains(&self.drawing.label_font_size) {
            log::warn!(
                "Invalid label_font_size {:.1}, clamping to 8.0-400.0 range",
                self.drawing.label_font_size
            );
            self.drawing.label_font_size = self.drawing.label_font_size.clamp(8.0, 400.0);
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = "Sans".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/scribblepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scribblepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str).context("Invalid config TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Serializes the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }
}
