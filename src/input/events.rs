//! Backend-independent input events.

use crate::draw::{FillMode, PaletteColor};
use crate::input::Tool;
use crate::util::Point;

/// A single event fed to the drawing surface.
///
/// Backends translate their native pointer and control events into these
/// values; positions are already in the surface's local coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed at a position
    PointerDown(Point),
    /// Pointer moved to a position
    PointerMove(Point),
    /// Shape kind selector changed
    SelectTool(Tool),
    /// Color selector changed
    SelectColor(PaletteColor),
    /// Fill mode selector changed
    SelectFill(FillMode),
    /// Raw contents of the stroke width field
    SetStrokeWidth(String),
}
