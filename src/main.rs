//! camscii runner (default binary).
//!
//! Captures frames from the selected source and repaints the terminal with
//! one colored glyph per block, for a fixed number of frames. Logs go to
//! stderr (`RUST_LOG=debug` for geometry changes) so they never mix with the
//! rendered frames on stdout.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use log::info;

use camscii::app::{self, Args};
use camscii::term::BlockRenderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let config = args.resolve(io::stdout().is_terminal())?;
    let mut source = config.open_source()?;

    let mut renderer = BlockRenderer::stdout(config.convert.clone())?;
    renderer.enter()?;

    let result = app::run(&mut source, &mut renderer, config.limit);

    // Always try to restore terminal state.
    let _ = renderer.exit();

    let stats = result?;
    info!(
        "rendered {} frames{}",
        stats.frames,
        if stats.exhausted { " (source ended)" } else { "" }
    );
    Ok(())
}
