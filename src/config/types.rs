//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use crate::draw::{FillMode, PaletteColor, PreviewStyle};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface dimensions and background.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background painted under all shapes - a name (palette entry, white,
    /// transparent) or an RGB array
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Initial tool/style controls.
///
/// These only seed the controls; the user changes them at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Shape kind selected at startup (rect, circle, line, polygon)
    #[serde(default)]
    pub default_tool: Tool,

    /// Palette color selected at startup (black, blue, red, green, purple)
    #[serde(default)]
    pub default_color: PaletteColor,

    /// Fill mode selected at startup (filled, outlined)
    #[serde(default)]
    pub default_fill: FillMode,

    /// Stroke width at startup (valid range: 1 - max_stroke_width)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: u32,

    /// Largest stroke width the control accepts (valid range: 1 - 1000)
    #[serde(default = "default_max_stroke_width")]
    pub max_stroke_width: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: PaletteColor::default(),
            default_fill: FillMode::default(),
            default_stroke_width: default_stroke_width(),
            max_stroke_width: default_max_stroke_width(),
        }
    }
}

/// Appearance of the in-progress preview outline.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PreviewConfig {
    /// Dash pattern as alternating on/off lengths in pixels
    #[serde(default = "default_preview_dash")]
    pub dash: Vec<f64>,

    /// Outline width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_preview_line_width")]
    pub line_width: f64,

    /// Outline color while previewing rectangles
    #[serde(default = "default_preview_rect_color")]
    pub rect_color: ColorSpec,

    /// Outline color while previewing circles
    #[serde(default = "default_preview_circle_color")]
    pub circle_color: ColorSpec,

    /// Outline color while previewing lines
    #[serde(default = "default_preview_line_color")]
    pub line_color: ColorSpec,

    /// Outline color while previewing polygons
    #[serde(default = "default_preview_polygon_color")]
    pub polygon_color: ColorSpec,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            dash: default_preview_dash(),
            line_width: default_preview_line_width(),
            rect_color: default_preview_rect_color(),
            circle_color: default_preview_circle_color(),
            line_color: default_preview_line_color(),
            polygon_color: default_preview_polygon_color(),
        }
    }
}

impl PreviewConfig {
    /// Resolves the configured values into a renderer style.
    pub fn to_style(&self) -> PreviewStyle {
        let fallback = PreviewStyle::default();
        PreviewStyle {
            dash: self.dash.clone(),
            line_width: self.line_width,
            rect_color: self.rect_color.to_color_or(fallback.rect_color),
            circle_color: self.circle_color.to_color_or(fallback.circle_color),
            line_color: self.line_color.to_color_or(fallback.line_color),
            polygon_color: self.polygon_color.to_color_or(fallback.polygon_color),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the status bar displaying the current tool controls
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text (valid range: 8.0 - 72.0)
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    1280
}

fn default_canvas_height() -> u32 {
    720
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_width() -> u32 {
    2
}

fn default_max_stroke_width() -> u32 {
    100
}

pub(super) fn default_preview_dash() -> Vec<f64> {
    vec![10.0, 5.0]
}

fn default_preview_line_width() -> f64 {
    2.0
}

fn default_preview_rect_color() -> ColorSpec {
    ColorSpec::Name("blue".to_string())
}

fn default_preview_circle_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_preview_line_color() -> ColorSpec {
    ColorSpec::Name("green".to_string())
}

fn default_preview_polygon_color() -> ColorSpec {
    ColorSpec::Name("purple".to_string())
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::TopLeft
}

fn default_status_font_size() -> f64 {
    16.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.75]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    5.0
}
