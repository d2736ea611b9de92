//! Input handling and the gesture state machine.
//!
//! This module translates backend pointer and tool-control events into drawing
//! actions. It maintains the current tool/style state, the shape list, and the
//! two-click gesture state machine (idle, armed).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::InputEvent;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
