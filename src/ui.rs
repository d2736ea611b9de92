//! Tool status bar rendering.
use crate::config::{StatusBarStyle, StatusPosition};
use crate::input::{DrawingState, InputState};

/// Margin between the status text and the edge of its backdrop
const STATUS_BACKDROP_MARGIN: f64 = 6.0;
/// Gap between the color dot and the text
const STATUS_DOT_GAP: f64 = 6.0;

/// Builds the status line describing the current tool controls.
///
/// The stroke width is only listed while outlined, mirroring when its
/// control is available.
pub fn status_text(input_state: &InputState) -> String {
    let mut text = format!(
        "[{}] [{}] [{}]",
        input_state.current_tool(),
        capitalize(input_state.current_color().name()),
        capitalize(&input_state.fill_mode().to_string()),
    );

    if input_state.stroke_width_available() {
        text.push_str(&format!(" [{}px]", input_state.stroke_width()));
    }

    if matches!(input_state.drawing_state(), DrawingState::Armed { .. }) {
        text.push_str("  click to finish");
    }

    text
}

/// Top-left corner of a `width` x `height` box pinned to a surface corner.
fn status_origin(
    position: StatusPosition,
    (width, height): (f64, f64),
    (screen_width, screen_height): (f64, f64),
    inset: f64,
) -> (f64, f64) {
    let left = inset;
    let top = inset;
    let right = screen_width - width - inset;
    let bottom = screen_height - height - inset;
    match position {
        StatusPosition::TopLeft => (left, top),
        StatusPosition::TopRight => (right, top),
        StatusPosition::BottomLeft => (left, bottom),
        StatusPosition::BottomRight => (right, bottom),
    }
}

/// Render status bar showing current tool, color, fill mode and stroke width
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let text = status_text(input_state);

    let _ = ctx.save();
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    ctx.set_font_size(style.font_size);

    let extents = match ctx.text_extents(&text) {
        Ok(extents) => extents,
        Err(err) => {
            log::warn!("Status bar skipped, text measurement failed: {err}");
            let _ = ctx.restore();
            return;
        }
    };

    let dot_diameter = style.dot_radius * 2.0;
    let content_height = extents.height().max(dot_diameter);
    let box_size = (
        dot_diameter + STATUS_DOT_GAP + extents.width() + STATUS_BACKDROP_MARGIN * 2.0,
        content_height + STATUS_BACKDROP_MARGIN * 2.0,
    );
    let (box_x, box_y) = status_origin(
        position,
        box_size,
        (screen_width as f64, screen_height as f64),
        style.padding,
    );
    let center_y = box_y + box_size.1 / 2.0;

    // Backdrop
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_size.0, box_size.1);
    let _ = ctx.fill();

    // Current palette color
    let dot_x = box_x + STATUS_BACKDROP_MARGIN + style.dot_radius;
    input_state.current_color().to_color().apply(ctx);
    ctx.new_path();
    ctx.arc(dot_x, center_y, style.dot_radius, 0.0, std::f64::consts::TAU);
    let _ = ctx.fill();

    // Text baseline centred on the ink box
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(
        dot_x + style.dot_radius + STATUS_DOT_GAP - extents.x_bearing(),
        center_y - extents.y_bearing() - extents.height() / 2.0,
    );
    let _ = ctx.show_text(&text);
    let _ = ctx.restore();
}

fn capitalize(word: &str) -> String {
    let mut letters = word.chars();
    letters
        .next()
        .map(|first| first.to_uppercase().chain(letters).collect())
        .unwrap_or_default()
}
