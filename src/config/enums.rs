//! Configuration enum types.

use crate::draw::{Color, PaletteColor, color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar position on the surface.
///
/// Controls where the tool status bar appears relative to the surface edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Custom RGB color (0-255 per component)
/// background = [250, 250, 240]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: any palette name, white or transparent
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names resolve to `fallback` with a warning. RGB arrays
    /// are converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb(rgb) => Color::from_rgb8(*rgb),
        }
    }
}

/// Maps color names (case-insensitive) to colors.
fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_ascii_lowercase().as_str() {
        "white" => Some(color::WHITE),
        "transparent" => Some(color::TRANSPARENT),
        other => other.parse::<PaletteColor>().ok().map(PaletteColor::to_color),
    }
}
