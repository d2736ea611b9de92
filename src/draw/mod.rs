//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the drawing surface:
//! - [`Color`] and [`PaletteColor`]: RGBA colors and the fixed selectable palette
//! - [`Shape`]: Tagged geometry plus the [`Style`] captured at commit time
//! - [`Frame`]: Append-only list of committed shapes
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod style;

// Re-export commonly used types at module level
pub use color::{Color, PaletteColor};
pub use frame::Frame;
pub use render::{PreviewStyle, render_background, render_preview, render_shape, render_shapes};
pub use shape::{Geometry, POLYGON_SIDES, Shape};
pub use style::{FillMode, Style, StyleError};
