//! Shape definitions for the drawing surface.

use super::style::Style;
use crate::input::Tool;
use crate::util::{self, Point, Rect};

/// Number of vertices of every regular polygon drawn with the polygon tool.
pub const POLYGON_SIDES: u32 = 5;

/// Kind-specific geometry of a shape.
///
/// Each variant only carries the fields its kind needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Axis-aligned rectangle anchored at its top-left corner
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        /// Width in pixels
        width: f64,
        /// Height in pixels
        height: f64,
    },
    /// Circle around a center point
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius in pixels
        radius: f64,
    },
    /// Straight segment between two points
    Line {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
    },
    /// Regular polygon around a center point
    Polygon {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Number of vertices
        sides: u32,
        /// Distance from center to each vertex
        radius: f64,
    },
}

impl Geometry {
    /// Builds the geometry a gesture describes for the given tool.
    ///
    /// `anchor` is the first click, `pointer` the current (or completing)
    /// pointer position.
    pub fn from_gesture(tool: Tool, anchor: Point, pointer: Point) -> Self {
        match tool {
            Tool::Rect => {
                let (x, y, width, height) = util::normalize_corners(anchor, pointer);
                Geometry::Rect {
                    x,
                    y,
                    width,
                    height,
                }
            }
            Tool::Circle => Geometry::Circle {
                cx: anchor.x,
                cy: anchor.y,
                radius: util::distance(anchor, pointer),
            },
            Tool::Line => Geometry::Line {
                x1: anchor.x,
                y1: anchor.y,
                x2: pointer.x,
                y2: pointer.y,
            },
            Tool::Polygon => Geometry::Polygon {
                cx: anchor.x,
                cy: anchor.y,
                sides: POLYGON_SIDES,
                radius: util::distance(anchor, pointer),
            },
        }
    }

    /// Returns the tool that produces this kind of geometry.
    pub fn tool(&self) -> Tool {
        match self {
            Geometry::Rect { .. } => Tool::Rect,
            Geometry::Circle { .. } => Tool::Circle,
            Geometry::Line { .. } => Tool::Line,
            Geometry::Polygon { .. } => Tool::Polygon,
        }
    }

    /// Float bounds `(min_x, min_y, max_x, max_y)` of the bare geometry.
    fn extents(&self) -> (f64, f64, f64, f64) {
        match *self {
            Geometry::Rect {
                x,
                y,
                width,
                height,
            } => (x, y, x + width, y + height),
            Geometry::Circle { cx, cy, radius } => {
                (cx - radius, cy - radius, cx + radius, cy + radius)
            }
            Geometry::Line { x1, y1, x2, y2 } => (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
            Geometry::Polygon {
                cx,
                cy,
                sides,
                radius,
            } => util::polygon_vertices(cx, cy, sides, radius).into_iter().fold(
                (cx, cy, cx, cy),
                |(min_x, min_y, max_x, max_y), (px, py)| {
                    (min_x.min(px), min_y.min(py), max_x.max(px), max_y.max(py))
                },
            ),
        }
    }
}

/// A drawable shape: geometry plus the style captured when it was built.
///
/// Shapes are plain values; once appended to a [`Frame`](super::Frame) they
/// are never modified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub style: Style,
}

impl Shape {
    pub fn new(geometry: Geometry, style: Style) -> Self {
        Self { geometry, style }
    }

    /// Whether this shape paints a stroke (as opposed to a fill).
    ///
    /// Lines have no interior, so they are always stroked.
    pub fn is_stroked(&self) -> bool {
        !self.style.filled || matches!(self.geometry, Geometry::Line { .. })
    }

    /// Returns the axis-aligned bounding box in whole pixels, expanded to cover the stroke.
    pub fn bounding_box(&self) -> Option<Rect> {
        let (min_x, min_y, max_x, max_y) = self.geometry.extents();
        let padding = if self.is_stroked() {
            self.style.stroke_width as f64 / 2.0
        } else {
            0.0
        };
        Rect::covering(
            min_x - padding,
            min_y - padding,
            max_x + padding,
            max_y + padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PaletteColor;

    fn outlined(width: u32) -> Style {
        Style {
            color: PaletteColor::Black,
            filled: false,
            stroke_width: width,
        }
    }

    #[test]
    fn rect_gesture_normalizes_reverse_drag() {
        let geometry =
            Geometry::from_gesture(Tool::Rect, Point::new(50.0, 30.0), Point::new(10.0, 10.0));
        assert_eq!(
            geometry,
            Geometry::Rect {
                x: 10.0,
                y: 10.0,
                width: 40.0,
                height: 20.0
            }
        );
    }

    #[test]
    fn line_gesture_keeps_endpoints_verbatim() {
        let geometry =
            Geometry::from_gesture(Tool::Line, Point::new(8.0, 9.0), Point::new(5.0, 5.0));
        assert_eq!(
            geometry,
            Geometry::Line {
                x1: 8.0,
                y1: 9.0,
                x2: 5.0,
                y2: 5.0
            }
        );
    }

    #[test]
    fn polygon_gesture_uses_five_sides() {
        let geometry =
            Geometry::from_gesture(Tool::Polygon, Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert_eq!(
            geometry,
            Geometry::Polygon {
                cx: 0.0,
                cy: 0.0,
                sides: 5,
                radius: 10.0
            }
        );
        assert_eq!(geometry.tool(), Tool::Polygon);
    }

    #[test]
    fn filled_rect_bounds_ignore_stroke() {
        let shape = Shape::new(
            Geometry::Rect {
                x: 10.0,
                y: 10.0,
                width: 40.0,
                height: 20.0,
            },
            Style::default(),
        );
        assert_eq!(shape.bounding_box(), Rect::new(10, 10, 40, 20));
    }

    #[test]
    fn outlined_circle_bounds_cover_stroke() {
        let shape = Shape::new(
            Geometry::Circle {
                cx: 100.0,
                cy: 50.0,
                radius: 20.0,
            },
            outlined(4),
        );
        assert_eq!(shape.bounding_box(), Rect::new(78, 28, 44, 44));
    }

    #[test]
    fn filled_line_is_still_stroked() {
        let shape = Shape::new(
            Geometry::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 0.0,
            },
            Style::default(),
        );
        assert!(shape.is_stroked());
        assert_eq!(shape.bounding_box(), Rect::new(-1, -1, 12, 2));
    }

    #[test]
    fn polygon_bounds_follow_vertices() {
        let shape = Shape::new(
            Geometry::Polygon {
                cx: 0.0,
                cy: 0.0,
                sides: POLYGON_SIDES,
                radius: 10.0,
            },
            Style::default(),
        );
        let rect = shape.bounding_box().expect("polygon should have bounds");
        // top vertex at y = -10; bottom vertices at y = 10*cos(36°) ≈ 8.09
        assert_eq!(rect.y, -10);
        assert_eq!(rect.y + rect.height, 9);
        assert_eq!(rect.x, -10);
        assert_eq!(rect.x + rect.width, 10);
    }

    #[test]
    fn far_apart_line_still_has_bounds() {
        let geometry = Geometry::from_gesture(
            Tool::Line,
            Point::new(-3.0e9, 0.0),
            Point::new(3.0e9, 0.0),
        );
        let shape = Shape::new(geometry, Style::default());
        let rect = shape.bounding_box().expect("line should have bounds");
        assert!(rect.contains(0, 0));
        assert!(rect.width > 0 && rect.height > 0);
    }
}
