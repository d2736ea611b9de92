use crate::draw::{Geometry, Shape};
use crate::util::Point;
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a primary pointer press.
    ///
    /// # Behavior
    /// - While Idle: records the anchor and arms the gesture. No shape is created yet.
    /// - While Armed: builds the final shape from the anchor, this position and
    ///   the current tool/style, appends it, clears the preview, returns to Idle.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let pointer = Point::new(x, y);
        match self.state {
            DrawingState::Idle => {
                self.state = DrawingState::Armed { anchor: pointer };
                self.needs_redraw = true;
                debug!("Gesture armed at ({x:.1}, {y:.1}) with {}", self.current_tool);
            }
            DrawingState::Armed { anchor } => {
                let shape = self.build_shape(anchor, pointer);
                self.frame.push(shape);
                self.preview = None;
                self.state = DrawingState::Idle;
                self.needs_redraw = true;
                debug!(
                    "Committed {} #{}: {:?}",
                    self.current_tool,
                    self.frame.len(),
                    shape.geometry
                );
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - While Armed: recomputes the preview from the anchor, this position and
    ///   the current tool/style.
    /// - While Idle: ignored.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let DrawingState::Armed { anchor } = self.state {
            self.preview = Some(self.build_shape(anchor, Point::new(x, y)));
            self.needs_redraw = true;
        }
    }

    /// Applies the current tool's geometry rule and snapshots the current style.
    fn build_shape(&self, anchor: Point, pointer: Point) -> Shape {
        Shape::new(
            Geometry::from_gesture(self.current_tool, anchor, pointer),
            self.current_style(),
        )
    }
}
