//! Drawing state machine and input state management.

use crate::config::DrawingConfig;
use crate::draw::{FillMode, Frame, PaletteColor, Shape, Style};
use crate::input::tool::Tool;
use crate::util::Point;

/// Current gesture state machine.
///
/// The anchor point only exists while armed, so completing a gesture without
/// a recorded anchor cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No gesture in progress - the next click records an anchor
    Idle,
    /// First click recorded - the next click commits a shape
    Armed {
        /// Pointer position of the first click
        anchor: Point,
    },
}

/// Main input state containing all drawing session state.
///
/// Holds the committed shapes, the current tool/style controls, the gesture
/// state machine and the live preview. Backends feed it events and read it
/// back for rendering; it never renders on its own initiative.
#[derive(Debug)]
pub struct InputState {
    /// Committed shapes in paint order
    pub(crate) frame: Frame,
    /// Shape kind produced by the next gesture
    pub(crate) current_tool: Tool,
    /// Color captured by the next committed shape
    pub(crate) current_color: PaletteColor,
    /// Fill or outline presentation for the next committed shape
    pub(crate) fill_mode: FillMode,
    /// Outline width for the next committed shape
    pub(crate) stroke_width: u32,
    /// Largest accepted stroke width
    pub(crate) max_stroke_width: u32,
    /// Gesture state machine
    pub(crate) state: DrawingState,
    /// Preview derived from the anchor and the last pointer move
    pub(crate) preview: Option<Shape>,
    /// Whether the surface needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `tool` - Initially selected shape kind
    /// * `style` - Initial color, fill flag and stroke width
    /// * `max_stroke_width` - Upper bound accepted by the stroke width control
    pub fn with_defaults(tool: Tool, style: Style, max_stroke_width: u32) -> Self {
        Self {
            frame: Frame::new(),
            current_tool: tool,
            current_color: style.color,
            fill_mode: FillMode::from(style.filled),
            stroke_width: style.stroke_width,
            max_stroke_width,
            state: DrawingState::Idle,
            preview: None,
            needs_redraw: true,
        }
    }

    /// Creates an InputState seeded from the `[drawing]` config section.
    pub fn from_config(config: &DrawingConfig) -> Self {
        Self::with_defaults(
            config.default_tool,
            Style {
                color: config.default_color,
                filled: config.default_fill.is_filled(),
                stroke_width: config.default_stroke_width,
            },
            config.max_stroke_width,
        )
    }

    /// Committed shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// Current gesture state.
    pub fn drawing_state(&self) -> DrawingState {
        self.state
    }

    /// Anchor of the in-progress gesture, if armed.
    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            DrawingState::Armed { anchor } => Some(anchor),
            DrawingState::Idle => None,
        }
    }

    /// Live preview of the in-progress gesture, if one has been computed.
    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    pub fn current_color(&self) -> PaletteColor {
        self.current_color
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Style snapshot that a shape built right now would capture.
    pub fn current_style(&self) -> Style {
        Style {
            color: self.current_color,
            filled: self.fill_mode.is_filled(),
            stroke_width: self.stroke_width,
        }
    }

    /// Whether the stroke width control is shown (outlined mode only).
    pub fn stroke_width_available(&self) -> bool {
        !self.fill_mode.is_filled()
    }

    /// Returns and clears the redraw flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
