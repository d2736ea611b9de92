//! Geometry helpers shared by the state machine and the renderer.
//!
//! This module provides:
//! - [`Point`] for pointer coordinates in surface space
//! - Euclidean distance and corner normalization for gesture geometry
//! - Regular polygon vertex placement
//! - Integer [`Rect`] bounds

use std::f64::consts::PI;

// ============================================================================
// Points and Distances
// ============================================================================

/// A pointer coordinate in the drawing surface's local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Normalizes two opposite corners into `(x, y, width, height)`.
///
/// The origin is the top-left corner regardless of the order the corners were
/// given in, so width and height are never negative.
pub fn normalize_corners(a: Point, b: Point) -> (f64, f64, f64, f64) {
    (
        a.x.min(b.x),
        a.y.min(b.y),
        (b.x - a.x).abs(),
        (b.y - a.y).abs(),
    )
}

/// Computes the vertices of a regular polygon.
///
/// The first vertex sits straight above the center and the rest follow
/// clockwise (in screen space, where y grows downward).
///
/// # Arguments
/// * `cx` - Center X coordinate
/// * `cy` - Center Y coordinate
/// * `sides` - Number of vertices (values below 3 yield no vertices)
/// * `radius` - Distance from center to each vertex
pub fn polygon_vertices(cx: f64, cy: f64, sides: u32, radius: f64) -> Vec<(f64, f64)> {
    if sides < 3 {
        return Vec::new();
    }
    (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / sides as f64;
            (cx + radius * angle.sin(), cy - radius * angle.cos())
        })
        .collect()
}

// ============================================================================
// Integer Bounds
// ============================================================================

/// Float coordinates are clamped to this magnitude before snapping to pixels,
/// so that any span between two clamped values still fits in an `i32`.
const PIXEL_COORD_LIMIT: f64 = (i32::MAX / 2) as f64;

/// Axis-aligned rectangle in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.checked_sub(min_x)?,
            max_y.checked_sub(min_y)?,
        )
    }

    /// Builds the smallest pixel rectangle covering the given float bounds.
    ///
    /// Degenerate spans are widened to a single pixel so that points and
    /// axis-aligned lines still produce a valid rectangle. Bounds far outside
    /// any surface are clamped rather than wrapped.
    pub fn covering(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        let snap = |v: f64| v.clamp(-PIXEL_COORD_LIMIT, PIXEL_COORD_LIMIT) as i32;
        let min_x = snap(min_x.floor());
        let min_y = snap(min_y.floor());
        let mut max_x = snap(max_x.ceil());
        let mut max_y = snap(max_y.ceil());
        if max_x == min_x {
            max_x += 1;
        }
        if max_y == min_y {
            max_y += 1;
        }
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Returns true if `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (left, top, right, bottom) = self.edges();
        x >= left && x < right && y >= top && y < bottom
    }

    /// Returns true if the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (left, top, right, bottom) = self.edges();
        let (o_left, o_top, o_right, o_bottom) = other.edges();
        left < o_right && o_left < right && top < o_bottom && o_top < bottom
    }

    fn edges(&self) -> (i64, i64, i64, i64) {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        (
            x,
            y,
            x + i64::from(self.width),
            y + i64::from(self.height),
        )
    }
}
