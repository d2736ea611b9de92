//! Append-only container for committed shapes.

use super::shape::Shape;

/// All shapes committed during the drawing session.
///
/// Shapes are kept in commit order, which is also paint order (first = bottom
/// layer, last = top layer). There is no way to remove, reorder or edit an
/// entry once it has been pushed.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a committed shape on top of existing shapes.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Read-only view of the shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Geometry, Style};

    #[test]
    fn push_preserves_commit_order() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());

        for i in 0..3 {
            frame.push(Shape::new(
                Geometry::Circle {
                    cx: i as f64,
                    cy: 0.0,
                    radius: 1.0,
                },
                Style::default(),
            ));
        }

        assert_eq!(frame.len(), 3);
        let centers: Vec<f64> = frame
            .shapes()
            .iter()
            .map(|shape| match shape.geometry {
                Geometry::Circle { cx, .. } => cx,
                _ => unreachable!("only circles were pushed"),
            })
            .collect();
        assert_eq!(centers, vec![0.0, 1.0, 2.0]);
    }
}
