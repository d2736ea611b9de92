//! RGBA color type and the fixed drawing palette.

use super::style::StyleError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use shapesketch::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Sets this color as the cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette Constants (CSS named colors)
// ============================================================================

/// CSS `black` (#000000)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// CSS `blue` (#0000ff)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// CSS `red` (#ff0000)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// CSS `green` (#008000)
pub const GREEN: Color = Color::new(0.0, 128.0 / 255.0, 0.0, 1.0);

/// CSS `purple` (#800080)
pub const PURPLE: Color = Color::new(128.0 / 255.0, 0.0, 128.0 / 255.0, 1.0);

/// Opaque white, the default canvas background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Selectable stroke/fill colors.
///
/// The set is closed: user color selection is always one of these entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Blue,
    Red,
    Green,
    Purple,
}

impl PaletteColor {
    /// Every palette entry, in control order.
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Purple,
    ];

    /// Lowercase name as used in scripts and config files.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::Blue => "blue",
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Purple => "purple",
        }
    }

    /// Resolves the entry to its RGBA value.
    pub fn to_color(self) -> Color {
        match self {
            PaletteColor::Black => BLACK,
            PaletteColor::Blue => BLUE,
            PaletteColor::Red => RED,
            PaletteColor::Green => GREEN,
            PaletteColor::Purple => PURPLE,
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaletteColor::ALL
            .into_iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleError::UnknownColor(s.to_string()))
    }
}
