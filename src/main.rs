use clap::{ArgAction, Parser};
use shapesketch::{Config, backend};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shapesketch")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SHAPESKETCH_GIT_HASH"), ")"),
    about = "Two-click shape drawing surface rendered with Cairo"
)]
struct Cli {
    /// Event script to replay (tool, color, fill, stroke-width, down, move, snapshot)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Write the final surface to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/shapesketch/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Surface width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Surface height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Hide the tool status bar
    #[arg(long, action = ArgAction::SetTrue)]
    no_status_bar: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if cli.no_status_bar {
        config.ui.show_status_bar = false;
    }
    config.validate_and_clamp();

    let summary = backend::run_headless(config, &cli.script, cli.output.as_deref())?;

    println!(
        "Replayed {} events: {} shapes committed, {} rejected, {} renders, {} snapshots",
        summary.events, summary.shapes, summary.rejected, summary.renders, summary.snapshots
    );
    if let Some(output) = &cli.output {
        println!("Final surface written to {}", output.display());
    }

    Ok(())
}
