//! Drawing tool selection.

use crate::draw::StyleError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines what shape a two-click gesture creates. It is
/// read live, so switching tools mid-gesture changes the next preview and
/// the committed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Rectangle - spanned between the two clicks
    #[default]
    #[serde(alias = "rectangle")]
    Rect,
    /// Circle - centered on the first click, radius to the second
    Circle,
    /// Straight line - between the two clicks
    Line,
    /// Regular pentagon - centered on the first click, radius to the second
    Polygon,
}

impl Tool {
    /// Human-readable label shown by the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Rect => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Line => "Line",
            Tool::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tool {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Ok(Tool::Rect),
            "circle" => Ok(Tool::Circle),
            "line" => Ok(Tool::Line),
            "polygon" => Ok(Tool::Polygon),
            _ => Err(StyleError::UnknownTool(s.to_string())),
        }
    }
}
