//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls how annotations look beyond the per-call color and thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Font family name for text annotations (e.g., "Avenir Next", "Sans")
    /// Pango falls back to a default family if it is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    /// Can be a named weight or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Text size in pixels (valid range: 6.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Selection handle diameter in pixels (valid range: 4.0 - 64.0)
    #[serde(default = "default_handle_size")]
    pub handle_size: f64,

    /// Outline color of option markers
    #[serde(default = "default_option_outline")]
    pub option_outline: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
            handle_size: default_handle_size(),
            option_outline: default_option_outline(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Ratio of physical to logical pixels (valid range: 0.25 - 8.0)
    /// 1.0 leaves surfaces unscaled; 2.0 suits most HiDPI screens
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            device_pixel_ratio: default_device_pixel_ratio(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_font_family() -> String {
    "Avenir Next".to_string()
}

fn default_font_weight() -> String {
    "bold".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    crate::draw::font::TEXT_FONT_SIZE
}

fn default_handle_size() -> f64 {
    crate::draw::render::DEFAULT_HANDLE_SIZE
}

fn default_option_outline() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}
