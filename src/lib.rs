//! Library exports for the shapesketch drawing surface.
//!
//! Exposes the gesture state machine, shape model and Cairo renderer alongside
//! the configuration and script loaders so that the CLI, the schema dumper and
//! integration tests share one implementation.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
