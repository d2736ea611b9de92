//! Shared shape style and the errors raised by tool controls.

use super::color::PaletteColor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether a shape paints its interior or its outline.
///
/// The two presentations are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Filled,
    Outlined,
}

impl FillMode {
    pub fn is_filled(self) -> bool {
        matches!(self, FillMode::Filled)
    }
}

impl From<bool> for FillMode {
    fn from(filled: bool) -> Self {
        if filled {
            FillMode::Filled
        } else {
            FillMode::Outlined
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FillMode::Filled => "filled",
            FillMode::Outlined => "outlined",
        })
    }
}

impl FromStr for FillMode {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filled" => Ok(FillMode::Filled),
            "outlined" => Ok(FillMode::Outlined),
            _ => Err(StyleError::UnknownFillMode(s.to_string())),
        }
    }
}

/// Style snapshot carried by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Palette entry used for fill or stroke
    pub color: PaletteColor,
    /// Paint the interior instead of the outline
    pub filled: bool,
    /// Outline width in pixels; ignored while `filled` is set
    pub stroke_width: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: PaletteColor::Black,
            filled: true,
            stroke_width: 2,
        }
    }
}

/// Rejections raised by the tool/style controls.
///
/// Every rejection leaves the previous control value untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown color '{0}' (expected black, blue, red, green or purple)")]
    UnknownColor(String),

    #[error("unknown shape tool '{0}' (expected rect, circle, line or polygon)")]
    UnknownTool(String),

    #[error("unknown fill mode '{0}' (expected filled or outlined)")]
    UnknownFillMode(String),

    #[error("stroke width '{0}' is not a whole number")]
    InvalidStrokeWidth(String),

    #[error("stroke width {value} is outside 1-{max}")]
    StrokeWidthOutOfRange { value: u64, max: u32 },

    #[error("stroke width can only be changed while drawing outlined shapes")]
    StrokeWidthUnavailable,
}

/// Parses raw stroke-width input against the `1..=max` range.
pub fn parse_stroke_width(input: &str, max: u32) -> Result<u32, StyleError> {
    let value: u64 = input
        .trim()
        .parse()
        .map_err(|_| StyleError::InvalidStrokeWidth(input.to_string()))?;

    if value == 0 || value > max as u64 {
        return Err(StyleError::StrokeWidthOutOfRange { value, max });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_width_accepts_whole_numbers_in_range() {
        assert_eq!(parse_stroke_width("4", 100), Ok(4));
        assert_eq!(parse_stroke_width(" 100 ", 100), Ok(100));
    }

    #[test]
    fn stroke_width_rejects_non_numeric_input() {
        assert_eq!(
            parse_stroke_width("wide", 100),
            Err(StyleError::InvalidStrokeWidth("wide".to_string()))
        );
        assert!(parse_stroke_width("", 100).is_err());
        assert!(parse_stroke_width("2.5", 100).is_err());
        assert!(parse_stroke_width("-3", 100).is_err());
    }

    #[test]
    fn stroke_width_rejects_zero_and_oversized_values() {
        assert_eq!(
            parse_stroke_width("0", 100),
            Err(StyleError::StrokeWidthOutOfRange { value: 0, max: 100 })
        );
        assert_eq!(
            parse_stroke_width("101", 100),
            Err(StyleError::StrokeWidthOutOfRange {
                value: 101,
                max: 100
            })
        );
    }

    #[test]
    fn fill_mode_parses_control_values() {
        assert_eq!("Outlined".parse::<FillMode>(), Ok(FillMode::Outlined));
        assert_eq!("filled".parse::<FillMode>(), Ok(FillMode::Filled));
        assert!("hollow".parse::<FillMode>().is_err());
    }
}
