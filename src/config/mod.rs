//! Configuration file support for autoscribe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/autoscribe/config.toml`. Settings cover the text font, handle
//! size, option marker outline, and the display's device pixel ratio.
//!
//! If no config file exists, defaults matching the built-in drawing constants are used.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DisplayConfig, DrawingConfig};

use crate::annotate::Annotator;
use crate::draw::{FontDescriptor, RenderOptions};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// font_family = "Avenir Next"
/// font_weight = "bold"
/// font_size = 30.0
/// handle_size = 12.0
/// option_outline = "black"
///
/// [display]
/// device_pixel_ratio = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Annotation appearance
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Display scaling
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default for non-numeric settings) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `font_size`: 6.0 - 200.0
    /// - `handle_size`: 4.0 - 64.0
    /// - `device_pixel_ratio`: 0.25 - 8.0
    fn validate_and_clamp(&mut self) {
        if !(6.0..=200.0).contains(&self.drawing.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 6.0-200.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = clamp_or(self.drawing.font_size, 6.0, 200.0, 30.0);
        }

        if !(4.0..=64.0).contains(&self.drawing.handle_size) {
            warn!(
                "Invalid handle_size {:.1}, clamping to 4.0-64.0 range",
                self.drawing.handle_size
            );
            self.drawing.handle_size = clamp_or(self.drawing.handle_size, 4.0, 64.0, 12.0);
        }

        if !(0.25..=8.0).contains(&self.display.device_pixel_ratio) {
            warn!(
                "Invalid device_pixel_ratio {:.2}, clamping to 0.25-8.0 range",
                self.display.device_pixel_ratio
            );
            self.display.device_pixel_ratio =
                clamp_or(self.display.device_pixel_ratio, 0.25, 8.0, 1.0);
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
            warn!(
                "Invalid font_weight '{}', falling back to 'bold'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "bold".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if !self.drawing.option_outline.is_valid() {
            warn!(
                "Invalid option_outline {:?}, falling back to 'black'",
                self.drawing.option_outline
            );
            self.drawing.option_outline = ColorSpec::Name("black".to_string());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("autoscribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the path cannot be determined, or the file exists but cannot
    /// be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds the annotation settings described by this config.
    pub fn annotator(&self) -> Annotator {
        Annotator {
            render: RenderOptions {
                handle_size: self.drawing.handle_size,
            },
            font: FontDescriptor::new(
                self.drawing.font_family.clone(),
                self.drawing.font_weight.clone(),
                self.drawing.font_style.clone(),
            ),
            font_size: self.drawing.font_size,
            option_outline: self.drawing.option_outline.to_color(),
        }
    }
}

/// Clamps `value` into range; NaN becomes `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
