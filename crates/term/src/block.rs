//! BlockRenderer: the frame callback target.
//!
//! Owns the converter, a reusable cell buffer and the terminal writer. Each
//! call to [`BlockRenderer::render`] resolves the grid, converts the borrowed
//! frame and repaints the terminal.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crate::core::{
    BlockConverter, CellBuffer, ConvertConfig, Frame, GeometryMode, GridGeometry, SizeProbe,
};
use crate::renderer::TerminalRenderer;
use crate::size::TerminalProbe;

pub struct BlockRenderer<P: SizeProbe = TerminalProbe, W: Write = io::Stdout> {
    converter: BlockConverter,
    cells: CellBuffer,
    term: TerminalRenderer<W>,
    probe: P,
    frames: u64,
}

impl BlockRenderer<TerminalProbe, io::Stdout> {
    /// Renderer writing to stdout, probing the real terminal in adaptive mode.
    pub fn stdout(config: ConvertConfig) -> Result<Self> {
        Self::new(config, TerminalProbe, TerminalRenderer::stdout())
    }
}

impl<P: SizeProbe, W: Write> BlockRenderer<P, W> {
    pub fn new(config: ConvertConfig, probe: P, term: TerminalRenderer<W>) -> Result<Self> {
        let converter = BlockConverter::new(config)?;
        let geom = converter.geometry();
        debug!(
            "block renderer: {:?}, frame {}x{}, palette {:?}, {:?}",
            converter.mode(),
            geom.frame.width,
            geom.frame.height,
            converter.palette().glyphs().iter().collect::<String>(),
            converter.order()
        );
        let cells = CellBuffer::new(geom.columns(), geom.rows());
        Ok(Self {
            converter,
            cells,
            term,
            probe,
            frames: 0,
        })
    }

    /// Convert `frame` and repaint the terminal with it.
    ///
    /// Conversion errors are [`crate::core::RenderError`]s wrapped in
    /// `anyhow::Error`; nothing is written when conversion fails.
    pub fn render(&mut self, frame: Frame<'_>) -> Result<GridGeometry> {
        let geom = self
            .converter
            .convert_into(frame, &mut self.probe, &mut self.cells)?;
        self.term.draw(&self.cells)?;
        self.frames += 1;
        Ok(geom)
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    pub fn mode(&self) -> GeometryMode {
        self.converter.mode()
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.converter.geometry()
    }

    /// Cells of the most recent frame.
    pub fn cells(&self) -> &CellBuffer {
        &self.cells
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn terminal(&self) -> &TerminalRenderer<W> {
        &self.term
    }

    pub fn into_terminal(self) -> TerminalRenderer<W> {
        self.term
    }
}
