// Headless backend: replays scripted events onto an offscreen Cairo surface
use crate::config::Config;
use crate::draw::{Color, PreviewStyle, color, render_background};
use crate::input::InputState;
use crate::script::{Command, ScriptLine};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while rendering or writing the surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counts gathered while replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Input events fed to the drawing surface
    pub events: usize,
    /// Tool control values that were rejected
    pub rejected: usize,
    /// Full repaints performed
    pub renders: usize,
    /// PNG snapshots written
    pub snapshots: usize,
    /// Committed shapes when the summary was taken
    pub shapes: usize,
}

/// Offscreen drawing surface driven by scripted events.
pub struct HeadlessBackend {
    input_state: InputState,
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
    background: Color,
    preview_style: PreviewStyle,
    config: Config,
    summary: ReplaySummary,
}

impl HeadlessBackend {
    /// Creates the surface and seeds the input state from configuration.
    pub fn new(config: Config) -> Result<Self, RenderError> {
        let width = config.canvas.width;
        let height = config.canvas.height;
        info!("Creating {}x{} offscreen surface", width, height);

        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;

        Ok(Self {
            input_state: InputState::from_config(&config.drawing),
            surface,
            width,
            height,
            background: config.canvas.background.to_color_or(color::WHITE),
            preview_style: config.preview.to_style(),
            config,
            summary: ReplaySummary::default(),
        })
    }

    /// Current drawing state.
    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// Counts gathered so far.
    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            shapes: self.input_state.shapes().len(),
            ..self.summary
        }
    }

    /// Feeds every script line to the drawing surface in order.
    ///
    /// The surface is repainted after each event that changed visible state.
    /// Rejected control values are logged and skipped; render and IO
    /// failures abort the replay.
    pub fn replay(&mut self, script: &[ScriptLine]) -> Result<ReplaySummary, RenderError> {
        // Initial paint so snapshots before any change still show the canvas.
        self.render_if_needed()?;

        for entry in script {
            match &entry.command {
                Command::Input(event) => {
                    self.summary.events += 1;
                    if let Err(err) = self.input_state.handle_event(event.clone()) {
                        self.summary.rejected += 1;
                        warn!("line {}: {}", entry.line, err);
                    }
                    self.render_if_needed()?;
                }
                Command::Snapshot(path) => {
                    self.write_png(path)?;
                    self.summary.snapshots += 1;
                }
            }
        }

        info!(
            "Replayed {} events ({} rejected), {} shapes committed",
            self.summary.events,
            self.summary.rejected,
            self.input_state.shapes().len()
        );
        Ok(self.summary())
    }

    fn render_if_needed(&mut self) -> Result<(), RenderError> {
        if self.input_state.take_needs_redraw() {
            self.render()?;
        }
        Ok(())
    }

    /// Repaints the whole surface from the current state.
    pub fn render(&mut self) -> Result<(), RenderError> {
        debug!("=== RENDER START ===");
        let ctx = cairo::Context::new(&self.surface)?;

        // Clear with fully transparent background
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        ctx.set_operator(cairo::Operator::Over);

        render_background(&ctx, self.background);

        debug!("Rendering {} committed shapes", self.input_state.shapes().len());
        self.input_state.render(&ctx, &self.preview_style);

        if self.config.ui.show_status_bar {
            crate::ui::render_status_bar(
                &ctx,
                &self.input_state,
                self.config.ui.status_bar_position,
                &self.config.ui.status_bar_style,
                self.width,
                self.height,
            );
        }

        drop(ctx);
        self.surface.flush();
        self.summary.renders += 1;
        debug!("=== RENDER END ===");
        Ok(())
    }

    /// Writes the current surface contents to a PNG file.
    ///
    /// Missing parent directories are created.
    pub fn write_png(&mut self, path: &Path) -> Result<(), RenderError> {
        // Pick up changes that have not been painted yet.
        self.render_if_needed()?;

        let io_error = |source: std::io::Error| RenderError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        self.surface.write_to_png(&mut writer)?;

        info!("Wrote surface to {}", path.display());
        Ok(())
    }
}
