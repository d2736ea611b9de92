use crate::draw::{FillMode, PaletteColor, StyleError, style};
use crate::input::{events::InputEvent, tool::Tool};
use log::{info, warn};

use super::InputState;

impl InputState {
    /// Dispatches a backend event to the matching handler.
    ///
    /// Only the stroke width control can be rejected; every other event is
    /// valid by construction.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), StyleError> {
        match event {
            InputEvent::PointerDown(p) => self.on_pointer_down(p.x, p.y),
            InputEvent::PointerMove(p) => self.on_pointer_move(p.x, p.y),
            InputEvent::SelectTool(tool) => self.set_tool(tool),
            InputEvent::SelectColor(color) => self.set_color(color),
            InputEvent::SelectFill(mode) => self.set_fill_mode(mode),
            InputEvent::SetStrokeWidth(input) => {
                self.set_stroke_width(&input)?;
            }
        }
        Ok(())
    }

    /// Selects the shape kind for the preview and the next commit.
    ///
    /// An armed gesture stays armed; its preview switches kind on the next move.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.current_tool != tool {
            info!("Tool changed to {tool}");
            self.current_tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Selects the palette color captured by subsequent shapes.
    pub fn set_color(&mut self, color: PaletteColor) {
        if self.current_color != color {
            info!("Color changed to {color}");
            self.current_color = color;
            self.needs_redraw = true;
        }
    }

    /// Switches between filled and outlined presentation.
    pub fn set_fill_mode(&mut self, mode: FillMode) {
        if self.fill_mode != mode {
            info!("Fill mode changed to {mode}");
            self.fill_mode = mode;
            self.needs_redraw = true;
        }
    }

    /// Applies raw stroke width input.
    ///
    /// The control only exists in outlined mode. Input that is not a whole
    /// number in `1..=max_stroke_width` is rejected and the previous width is
    /// kept.
    ///
    /// # Returns
    /// The accepted width.
    pub fn set_stroke_width(&mut self, input: &str) -> Result<u32, StyleError> {
        if !self.stroke_width_available() {
            warn!("Ignoring stroke width '{input}' while fill mode is {}", self.fill_mode);
            return Err(StyleError::StrokeWidthUnavailable);
        }

        match style::parse_stroke_width(input, self.max_stroke_width) {
            Ok(width) => {
                if width != self.stroke_width {
                    info!("Stroke width changed to {width}px");
                    self.stroke_width = width;
                    self.needs_redraw = true;
                }
                Ok(width)
            }
            Err(err) => {
                warn!("{err}; keeping {}px", self.stroke_width);
                Err(err)
            }
        }
    }
}
