//! Command-line configuration and the capture/render loop.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::capture::{run_capture, CaptureStats, FrameLimit, FrameSource, PatternSource, RawSource};
use crate::core::{ConvertConfig, GeometryMode, GlyphPalette, SampleOrder, SizeProbe};
use crate::term::BlockRenderer;
use crate::types::{
    FrameDims, GridSize, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
    DEFAULT_PALETTE, DEFAULT_PATTERN_FPS,
};

/// Where frames come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Animated synthetic test pattern.
    Pattern,
    /// Raw RGB24 frames on stdin.
    Stdin,
}

/// Render live RGB frames as true-color character art.
#[derive(Debug, Clone, Parser)]
#[command(name = "camscii", version, about)]
pub struct Args {
    /// Frame source.
    #[arg(long, value_enum, default_value_t = SourceKind::Pattern)]
    pub source: SourceKind,

    /// Frame width in pixels.
    #[arg(long, default_value_t = DEFAULT_FRAME_WIDTH)]
    pub width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = DEFAULT_FRAME_HEIGHT)]
    pub height: u32,

    /// Fixed grid width in cells (needs --rows). Without a fixed grid the
    /// grid follows the terminal size.
    #[arg(long, requires = "rows")]
    pub columns: Option<u16>,

    /// Fixed grid height in cells (needs --columns).
    #[arg(long, requires = "columns")]
    pub rows: Option<u16>,

    /// Frames to render; 0 renders until the source ends.
    #[arg(long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: u32,

    /// Glyphs from darkest to brightest.
    #[arg(long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Use the legacy swapped block addressing.
    #[arg(long)]
    pub transposed: bool,

    /// Frame rate of the pattern source; 0 runs unpaced.
    #[arg(long, default_value_t = DEFAULT_PATTERN_FPS)]
    pub fps: u32,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceKind,
    pub dims: FrameDims,
    pub convert: ConvertConfig,
    pub limit: FrameLimit,
    pub fps: u32,
}

impl Args {
    /// Turn parsed arguments into a run configuration.
    ///
    /// `stdout_is_terminal` decides what happens without an explicit grid:
    /// adaptive geometry on a terminal, otherwise the fallback grid.
    pub fn resolve(&self, stdout_is_terminal: bool) -> Result<AppConfig> {
        let dims = FrameDims::new(self.width, self.height);
        let palette = GlyphPalette::new(&self.palette).context("invalid --palette")?;

        let mode = match (self.columns, self.rows) {
            (Some(columns), Some(rows)) => GeometryMode::Fixed(GridSize::new(columns, rows)),
            _ if stdout_is_terminal => GeometryMode::Adaptive,
            _ => {
                let grid = GridSize::default();
                warn!(
                    "stdout is not a terminal; using a fixed {}x{} grid (pass --columns/--rows to change)",
                    grid.columns, grid.rows
                );
                GeometryMode::Fixed(grid)
            }
        };

        let order = if self.transposed {
            SampleOrder::Transposed
        } else {
            SampleOrder::RowMajor
        };

        Ok(AppConfig {
            source: self.source,
            dims,
            convert: ConvertConfig::new(dims, mode)
                .with_palette(palette)
                .with_order(order),
            limit: FrameLimit::from_count(self.frames),
            fps: self.fps,
        })
    }
}

impl AppConfig {
    pub fn open_source(&self) -> Result<Box<dyn FrameSource>> {
        let source: Box<dyn FrameSource> = match self.source {
            SourceKind::Pattern => Box::new(PatternSource::new(self.dims)?.with_fps(self.fps)),
            SourceKind::Stdin => Box::new(RawSource::new(io::stdin().lock(), self.dims)?),
        };
        info!(
            "source {:?}, {}x{} RGB24",
            self.source, self.dims.width, self.dims.height
        );
        Ok(source)
    }
}

/// Capture from `source` and render every frame until `limit`.
///
/// The first render or capture error stops the loop and is returned.
pub fn run<S, P, W>(
    source: &mut S,
    renderer: &mut BlockRenderer<P, W>,
    limit: FrameLimit,
) -> Result<CaptureStats>
where
    S: FrameSource + ?Sized,
    P: SizeProbe,
    W: Write,
{
    run_capture(source, limit, |frame| {
        renderer.render(frame)?;
        Ok(())
    })
}
