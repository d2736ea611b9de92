//! Configuration file support for shapesketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapesketch/config.toml`. Settings include the canvas size and
//! background, the initial tool controls, the preview outline and the status bar.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StatusPosition};
pub use types::{CanvasConfig, DrawingConfig, PreviewConfig, StatusBarStyle, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_EDGE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1280
/// height = 720
/// background = "white"
///
/// [drawing]
/// default_tool = "circle"
/// default_color = "purple"
/// default_fill = "outlined"
/// default_stroke_width = 3
///
/// [preview]
/// dash = [10.0, 5.0]
/// line_width = 2.0
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "top-left"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial tool controls (shape kind, color, fill mode, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Preview outline appearance
    #[serde(default)]
    pub preview: PreviewConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to their
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `drawing.max_stroke_width`: 1 - 1000
    /// - `drawing.default_stroke_width`: 1 - `max_stroke_width`
    /// - `preview.line_width`: 0.5 - 20.0
    /// - `preview.dash`: non-empty, every entry positive
    /// - `ui.status_bar_style.font_size`: 8.0 - 72.0
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=1000).contains(&self.drawing.max_stroke_width) {
            log::warn!(
                "Invalid max_stroke_width {}, clamping to 1-1000 range",
                self.drawing.max_stroke_width
            );
            self.drawing.max_stroke_width = self.drawing.max_stroke_width.clamp(1, 1000);
        }

        let max_width = self.drawing.max_stroke_width;
        if !(1..=max_width).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {}, clamping to 1-{} range",
                self.drawing.default_stroke_width,
                max_width
            );
            self.drawing.default_stroke_width =
                self.drawing.default_stroke_width.clamp(1, max_width);
        }

        if !(0.5..=20.0).contains(&self.preview.line_width) {
            log::warn!(
                "Invalid preview line_width {:.1}, clamping to 0.5-20.0 range",
                self.preview.line_width
            );
            self.preview.line_width = self.preview.line_width.clamp(0.5, 20.0);
        }

        if self.preview.dash.is_empty()
            || self
                .preview
                .dash
                .iter()
                .any(|len| !len.is_finite() || *len <= 0.0)
        {
            log::warn!(
                "Invalid preview dash {:?}, falling back to default",
                self.preview.dash
            );
            self.preview.dash = types::default_preview_dash();
        }

        let style = &mut self.ui.status_bar_style;
        if !(8.0..=72.0).contains(&style.font_size) {
            log::warn!(
                "Invalid status bar font_size {:.1}, clamping to 8.0-72.0 range",
                style.font_size
            );
            style.font_size = style.font_size.clamp(8.0, 72.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapesketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapesketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from TOML text without validating it.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FillMode, PaletteColor};
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.width, 1280);
        assert_eq!(config.canvas.height, 720);
        assert_eq!(config.drawing.default_tool, Tool::Rect);
        assert_eq!(config.drawing.default_color, PaletteColor::Black);
        assert_eq!(config.drawing.default_fill, FillMode::Filled);
        assert_eq!(config.drawing.default_stroke_width, 2);
        assert_eq!(config.preview.dash, vec![10.0, 5.0]);
        assert!(config.ui.show_status_bar);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml(
            r#"
            [canvas]
            width = 640
            background = [10, 20, 30]

            [drawing]
            default_tool = "rectangle"
            default_color = "green"
            default_fill = "outlined"
            default_stroke_width = 7

            [ui]
            status_bar_position = "bottom-right"
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 720);
        assert_eq!(config.canvas.background, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(config.drawing.default_tool, Tool::Rect);
        assert_eq!(config.drawing.default_color, PaletteColor::Green);
        assert_eq!(config.drawing.default_fill, FillMode::Outlined);
        assert_eq!(config.drawing.default_stroke_width, 7);
        assert_eq!(config.ui.status_bar_position, StatusPosition::BottomRight);
    }

    #[test]
    fn unknown_palette_color_is_a_parse_error() {
        assert!(Config::from_toml("[drawing]\ndefault_color = \"orange\"").is_err());
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 100000

            [drawing]
            default_stroke_width = 500
            max_stroke_width = 50

            [preview]
            dash = [10.0, -1.0]
            line_width = 90.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.drawing.default_stroke_width, 50);
        assert_eq!(config.preview.dash, vec![10.0, 5.0]);
        assert_eq!(config.preview.line_width, 20.0);
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[drawing]\ndefault_stroke_width = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_stroke_width, 1);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn schema_names_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "drawing", "preview", "ui"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
