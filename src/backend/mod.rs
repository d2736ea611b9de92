use crate::config::Config;
use crate::script;
use anyhow::{Context, Result};
use std::path::Path;

pub mod headless;

pub use headless::{HeadlessBackend, RenderError, ReplaySummary};

/// Replays an event script on an offscreen surface.
///
/// # Arguments
/// * `config` - Loaded configuration (canvas size already applied)
/// * `script_path` - Event script to replay
/// * `output` - Optional PNG path for the final surface
pub fn run_headless(
    config: Config,
    script_path: &Path,
    output: Option<&Path>,
) -> Result<ReplaySummary> {
    let script = script::load(script_path)?;
    log::info!(
        "Loaded {} commands from {}",
        script.len(),
        script_path.display()
    );

    let mut backend = HeadlessBackend::new(config).context("Failed to create drawing surface")?;
    backend
        .replay(&script)
        .with_context(|| format!("Replay of {} failed", script_path.display()))?;

    if let Some(path) = output {
        backend.write_png(path)?;
    }

    Ok(backend.summary())
}
