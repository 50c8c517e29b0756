//! BlockConverter: frame in, grid of colored glyphs out.
//!
//! This module is pure (no I/O besides the optional terminal size probe).
//! Encoding the cells as escape sequences lives in the terminal crate.

use log::trace;

use crate::error::Result;
use crate::fb::{Cell, CellBuffer};
use crate::frame::Frame;
use crate::geometry::{GeometryMode, GeometryResolver, GridGeometry, SizeProbe};
use crate::palette::GlyphPalette;
use crate::sample::{sample_block, SampleOrder};
use crate::types::FrameDims;

/// Converter settings.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub frame: FrameDims,
    pub mode: GeometryMode,
    pub palette: GlyphPalette,
    pub order: SampleOrder,
}

impl ConvertConfig {
    pub fn new(frame: FrameDims, mode: GeometryMode) -> Self {
        Self {
            frame,
            mode,
            palette: GlyphPalette::default(),
            order: SampleOrder::default(),
        }
    }

    pub fn with_palette(mut self, palette: GlyphPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_order(mut self, order: SampleOrder) -> Self {
        self.order = order;
        self
    }
}

/// Converts frames into cell buffers.
#[derive(Debug, Clone)]
pub struct BlockConverter {
    resolver: GeometryResolver,
    palette: GlyphPalette,
    order: SampleOrder,
}

impl BlockConverter {
    pub fn new(config: ConvertConfig) -> Result<Self> {
        Ok(Self {
            resolver: GeometryResolver::new(config.mode, config.frame)?,
            palette: config.palette,
            order: config.order,
        })
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.resolver.current()
    }

    pub fn mode(&self) -> GeometryMode {
        self.resolver.mode()
    }

    pub fn palette(&self) -> &GlyphPalette {
        &self.palette
    }

    pub fn order(&self) -> SampleOrder {
        self.order
    }

    /// Convert `frame` into `out`, resizing it to the resolved grid.
    ///
    /// This is the allocation-free hot path once `out` has reached its
    /// largest size. The frame is only borrowed for the duration of the call.
    pub fn convert_into(
        &mut self,
        frame: Frame<'_>,
        probe: &mut dyn SizeProbe,
        out: &mut CellBuffer,
    ) -> Result<GridGeometry> {
        frame.validate(self.resolver.frame())?;

        let geom = self.resolver.resolve(probe)?;
        self.order.check_bounds(&geom, frame.len())?;

        out.resize(geom.columns(), geom.rows());
        for row in 0..geom.rows() {
            for col in 0..geom.columns() {
                let sample = sample_block(&frame, &geom, col, row, self.order);
                out.set(
                    col,
                    row,
                    Cell {
                        glyph: self.palette.glyph_for(sample.luma),
                        color: sample.color,
                    },
                );
            }
        }

        trace!(
            "converted {} bytes into {}x{} cells",
            frame.len(),
            geom.columns(),
            geom.rows()
        );
        Ok(geom)
    }

    /// Convenience wrapper around [`BlockConverter::convert_into`] that
    /// allocates a fresh buffer.
    pub fn convert(&mut self, frame: Frame<'_>, probe: &mut dyn SizeProbe) -> Result<CellBuffer> {
        let mut out = CellBuffer::new(0, 0);
        self.convert_into(frame, probe, &mut out)?;
        Ok(out)
    }
}
