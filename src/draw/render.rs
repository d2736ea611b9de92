//! Cairo-based rendering functions for shapes.

use super::color::{self, Color};
use super::shape::{Geometry, Shape};
use crate::input::Tool;
use crate::util::{self, Rect};
use log::trace;

/// Appearance of the in-progress preview shape.
///
/// The preview never uses the user's style: it is always an unfilled dashed
/// outline in a color chosen by shape kind.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewStyle {
    /// Dash pattern (on, off, ...) in pixels
    pub dash: Vec<f64>,
    /// Outline width in pixels
    pub line_width: f64,
    pub rect_color: Color,
    pub circle_color: Color,
    pub line_color: Color,
    pub polygon_color: Color,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            dash: vec![10.0, 5.0],
            line_width: 2.0,
            rect_color: color::BLUE,
            circle_color: color::RED,
            line_color: color::GREEN,
            polygon_color: color::PURPLE,
        }
    }
}

impl PreviewStyle {
    /// Returns the outline color used when previewing shapes of `tool`.
    pub fn color_for(&self, tool: Tool) -> Color {
        match tool {
            Tool::Rect => self.rect_color,
            Tool::Circle => self.circle_color,
            Tool::Line => self.line_color,
            Tool::Polygon => self.polygon_color,
        }
    }
}

/// Fills the whole surface with the canvas background color.
///
/// Should be called after clearing the canvas but before rendering shapes.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    if background.a <= 0.0 {
        return;
    }
    let _ = ctx.save();
    background.apply(ctx);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint(); // Ignore errors - a failed paint just leaves the surface clear
    let _ = ctx.restore();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
/// Shapes whose bounding box misses the current clip region are skipped.
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    let visible = ctx
        .clip_extents()
        .ok()
        .and_then(|(x1, y1, x2, y2)| Rect::covering(x1, y1, x2, y2));

    for shape in shapes {
        if let (Some(visible), Some(bounds)) = (visible, shape.bounding_box()) {
            if !visible.intersects(&bounds) {
                trace!("Skipping off-surface shape {:?}", shape.geometry);
                continue;
            }
        }
        render_shape(ctx, shape);
    }
}

/// Renders a single committed shape.
///
/// Filled shapes paint their interior in the style color with no outline;
/// outlined shapes paint only the outline at the style's stroke width.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    let _ = ctx.save();
    shape.style.color.to_color().apply(ctx);
    trace_geometry(ctx, &shape.geometry);

    if shape.is_stroked() {
        ctx.set_line_width(shape.style.stroke_width as f64);
        let _ = ctx.stroke();
    } else {
        let _ = ctx.fill();
    }
    let _ = ctx.restore();
}

/// Renders the in-progress preview as a dashed, unfilled outline.
pub fn render_preview(ctx: &cairo::Context, shape: &Shape, style: &PreviewStyle) {
    let _ = ctx.save();
    style.color_for(shape.geometry.tool()).apply(ctx);
    ctx.set_line_width(style.line_width);
    ctx.set_dash(&style.dash, 0.0);
    trace_geometry(ctx, &shape.geometry);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Builds the path for a geometry without painting it.
fn trace_geometry(ctx: &cairo::Context, geometry: &Geometry) {
    ctx.new_path();
    match *geometry {
        Geometry::Rect {
            x,
            y,
            width,
            height,
        } => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(x, y, width, height);
        }
        Geometry::Circle { cx, cy, radius } => {
            ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
            ctx.close_path();
        }
        Geometry::Line { x1, y1, x2, y2 } => {
            ctx.set_line_cap(cairo::LineCap::Butt);
            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
        }
        Geometry::Polygon {
            cx,
            cy,
            sides,
            radius,
        } => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            let vertices = util::polygon_vertices(cx, cy, sides, radius);
            if let Some((&(x0, y0), rest)) = vertices.split_first() {
                ctx.move_to(x0, y0);
                for &(x, y) in rest {
                    ctx.line_to(x, y);
                }
                ctx.close_path();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{PaletteColor, Style};

    fn surface(width: i32, height: i32) -> cairo::ImageSurface {
        cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .expect("image surface")
    }

    /// Reads a pixel as (a, r, g, b) from a premultiplied ARGB32 surface.
    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().expect("surface data");
        let offset = y * stride + x * 4;
        let value = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    #[test]
    fn filled_rect_paints_interior_without_outline_gap() {
        let mut surface = surface(100, 100);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            let shape = Shape::new(
                Geometry::Rect {
                    x: 10.0,
                    y: 10.0,
                    width: 40.0,
                    height: 20.0,
                },
                Style {
                    color: PaletteColor::Red,
                    filled: true,
                    stroke_width: 2,
                },
            );
            render_shape(&ctx, &shape);
        }

        assert_eq!(pixel(&mut surface, 30, 20), (255, 255, 0, 0));
        assert_eq!(pixel(&mut surface, 60, 20).0, 0);
    }

    #[test]
    fn outlined_circle_leaves_center_empty() {
        let mut surface = surface(100, 100);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            let shape = Shape::new(
                Geometry::Circle {
                    cx: 50.0,
                    cy: 50.0,
                    radius: 30.0,
                },
                Style {
                    color: PaletteColor::Blue,
                    filled: false,
                    stroke_width: 4,
                },
            );
            render_shape(&ctx, &shape);
        }

        assert_eq!(pixel(&mut surface, 50, 50).0, 0);
        assert_eq!(pixel(&mut surface, 80, 50), (255, 0, 0, 255));
    }

    #[test]
    fn preview_uses_kind_color_not_user_style() {
        let mut surface = surface(100, 100);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            let shape = Shape::new(
                Geometry::Line {
                    x1: 0.0,
                    y1: 50.0,
                    x2: 100.0,
                    y2: 50.0,
                },
                Style {
                    color: PaletteColor::Black,
                    filled: true,
                    stroke_width: 10,
                },
            );
            render_preview(&ctx, &shape, &PreviewStyle::default());
        }

        // First dash covers x in [0, 10); the gap covers [10, 15).
        let (a, r, g, b) = pixel(&mut surface, 5, 50);
        assert_eq!(a, 255);
        assert_eq!((r, b), (0, 0));
        assert!((127..=129).contains(&g));
        assert_eq!(pixel(&mut surface, 12, 50).0, 0);
        // Preview width is 2px regardless of the user's stroke width.
        assert_eq!(pixel(&mut surface, 5, 55).0, 0);
    }

    #[test]
    fn committed_line_is_stroked_at_style_width() {
        let mut surface = surface(100, 100);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            let shape = Shape::new(
                Geometry::Line {
                    x1: 10.0,
                    y1: 50.0,
                    x2: 90.0,
                    y2: 50.0,
                },
                Style {
                    color: PaletteColor::Blue,
                    filled: true,
                    stroke_width: 6,
                },
            );
            render_shapes(&ctx, &[shape]);
        }

        // Solid, not dashed: the whole span is painted.
        assert_eq!(pixel(&mut surface, 15, 50), (255, 0, 0, 255));
        assert_eq!(pixel(&mut surface, 60, 52), (255, 0, 0, 255));
        assert_eq!(pixel(&mut surface, 60, 54).0, 0);
        // Butt caps stop at the endpoints.
        assert_eq!(pixel(&mut surface, 92, 50).0, 0);
    }

    #[test]
    fn filled_polygon_paints_center() {
        let mut surface = surface(100, 100);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            let shape = Shape::new(
                Geometry::Polygon {
                    cx: 50.0,
                    cy: 50.0,
                    sides: 5,
                    radius: 30.0,
                },
                Style {
                    color: PaletteColor::Purple,
                    filled: true,
                    stroke_width: 2,
                },
            );
            render_shapes(&ctx, &[shape]);
        }

        let (a, r, g, b) = pixel(&mut surface, 50, 50);
        assert_eq!((a, g), (255, 0));
        assert!((127..=129).contains(&r));
        assert!((127..=129).contains(&b));
        // Outside the pentagon's top vertex.
        assert_eq!(pixel(&mut surface, 50, 15).0, 0);
    }

    #[test]
    fn shapes_far_outside_the_clip_are_skipped_safely() {
        let mut surface = surface(40, 40);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            let far = Shape::new(
                Geometry::Rect {
                    x: 5000.0,
                    y: 5000.0,
                    width: 10.0,
                    height: 10.0,
                },
                Style::default(),
            );
            let spanning = Shape::new(
                Geometry::Line {
                    x1: -3.0e9,
                    y1: 20.0,
                    x2: 3.0e9,
                    y2: 20.0,
                },
                Style::default(),
            );
            render_shapes(&ctx, &[far, spanning]);
        }

        assert_eq!(pixel(&mut surface, 20, 5).0, 0);
    }

    #[test]
    fn background_covers_surface() {
        let mut surface = surface(10, 10);
        {
            let ctx = cairo::Context::new(&surface).expect("context");
            render_background(&ctx, color::WHITE);
        }
        assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255, 255));
        assert_eq!(pixel(&mut surface, 9, 9), (255, 255, 255, 255));
    }
}
