use crate::draw::{PreviewStyle, render_preview, render_shapes};

use super::InputState;

impl InputState {
    /// Paints the committed shapes followed by the live preview.
    ///
    /// This is a pure read of the state: the caller decides when to paint
    /// (typically after [`take_needs_redraw`](Self::take_needs_redraw)).
    pub fn render(&self, ctx: &cairo::Context, preview_style: &PreviewStyle) {
        render_shapes(ctx, self.frame.shapes());
        self.render_provisional_shape(ctx, preview_style);
    }

    /// Renders the preview shape, if any.
    pub fn render_provisional_shape(&self, ctx: &cairo::Context, preview_style: &PreviewStyle) {
        if let Some(shape) = &self.preview {
            render_preview(ctx, shape, preview_style);
        }
    }
}
