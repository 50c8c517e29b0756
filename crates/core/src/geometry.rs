//! Grid geometry: how many cells, and how many pixels each cell covers.
//!
//! Block dimensions use integer division. Pixels past `columns * block_width`
//! (or `rows * block_height`) at the high end of the frame are not sampled.

use std::io;

use log::debug;

use crate::error::{RenderError, Result};
use crate::types::{FrameDims, GridSize};

/// Source of the live terminal size in character cells.
pub trait SizeProbe {
    fn size(&mut self) -> io::Result<GridSize>;
}

impl<F> SizeProbe for F
where
    F: FnMut() -> io::Result<GridSize>,
{
    fn size(&mut self) -> io::Result<GridSize> {
        self()
    }
}

/// Probe for fixed-geometry callers that never consult the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl SizeProbe for NoProbe {
    fn size(&mut self) -> io::Result<GridSize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no terminal size probe configured",
        ))
    }
}

/// How the output grid is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryMode {
    /// Grid set once at construction and never recomputed.
    Fixed(GridSize),
    /// Grid re-derived from the terminal size before every render.
    Adaptive,
}

/// Resolved geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub grid: GridSize,
    pub frame: FrameDims,
    pub block_width: u32,
    pub block_height: u32,
}

impl GridGeometry {
    /// Strict constructor: zero-sized grids and grids larger than the frame
    /// are rejected.
    pub fn new(grid: GridSize, frame: FrameDims) -> Result<Self> {
        if grid.is_empty() {
            return Err(RenderError::DegenerateGrid {
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        if u32::from(grid.columns) > frame.width || u32::from(grid.rows) > frame.height {
            return Err(RenderError::BlockTooSmall {
                columns: grid.columns,
                rows: grid.rows,
                width: frame.width,
                height: frame.height,
            });
        }
        Ok(Self::derive(grid, frame))
    }

    /// Clamp each axis to `1..=frame dimension`, then derive blocks.
    ///
    /// Used for sizes reported by the terminal, which may be zero for a
    /// detached or minimised window. `frame` must be non-empty.
    pub fn clamped(grid: GridSize, frame: FrameDims) -> Self {
        let max_cols = frame.width.clamp(1, u32::from(u16::MAX)) as u16;
        let max_rows = frame.height.clamp(1, u32::from(u16::MAX)) as u16;
        let grid = GridSize::new(grid.columns.clamp(1, max_cols), grid.rows.clamp(1, max_rows));
        Self::derive(grid, frame)
    }

    fn derive(grid: GridSize, frame: FrameDims) -> Self {
        Self {
            grid,
            frame,
            block_width: frame.width / u32::from(grid.columns),
            block_height: frame.height / u32::from(grid.rows),
        }
    }

    pub fn columns(&self) -> u16 {
        self.grid.columns
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows
    }

    pub fn block_pixel_count(&self) -> usize {
        (self.block_width as usize) * (self.block_height as usize)
    }
}

/// Tracks the current geometry and applies the configured [`GeometryMode`].
#[derive(Debug, Clone)]
pub struct GeometryResolver {
    mode: GeometryMode,
    current: GridGeometry,
}

impl GeometryResolver {
    pub fn new(mode: GeometryMode, frame: FrameDims) -> Result<Self> {
        // A 1x1 grid is the smallest valid one; this rejects empty frames.
        GridGeometry::new(GridSize::new(1, 1), frame)?;

        let current = match mode {
            GeometryMode::Fixed(grid) => GridGeometry::new(grid, frame)?,
            GeometryMode::Adaptive => GridGeometry::clamped(GridSize::default(), frame),
        };
        Ok(Self { mode, current })
    }

    pub fn mode(&self) -> GeometryMode {
        self.mode
    }

    pub fn current(&self) -> &GridGeometry {
        &self.current
    }

    pub fn frame(&self) -> FrameDims {
        self.current.frame
    }

    /// Geometry for the next render.
    ///
    /// Fixed mode never touches `probe`.
    pub fn resolve(&mut self, probe: &mut dyn SizeProbe) -> Result<GridGeometry> {
        if let GeometryMode::Adaptive = self.mode {
            let size = probe.size()?;
            let next = GridGeometry::clamped(size, self.current.frame);
            if next != self.current {
                debug!(
                    "grid {}x{} -> {}x{} (blocks {}x{} px)",
                    self.current.grid.columns,
                    self.current.grid.rows,
                    next.grid.columns,
                    next.grid.rows,
                    next.block_width,
                    next.block_height
                );
                self.current = next;
            }
        }
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VGA: FrameDims = FrameDims::new(640, 480);

    #[test]
    fn blocks_use_integer_division() {
        let g = GridGeometry::new(GridSize::new(80, 24), VGA).unwrap();
        assert_eq!(g.block_width, 8);
        assert_eq!(g.block_height, 20);

        let g = GridGeometry::new(GridSize::new(100, 7), VGA).unwrap();
        assert_eq!(g.block_width, 6);
        assert_eq!(g.block_height, 68);
        assert_eq!(g.block_pixel_count(), 6 * 68);
    }

    #[test]
    fn zero_grid_is_rejected() {
        assert!(matches!(
            GridGeometry::new(GridSize::new(0, 24), VGA),
            Err(RenderError::DegenerateGrid { columns: 0, rows: 24 })
        ));
        assert!(matches!(
            GeometryResolver::new(GeometryMode::Fixed(GridSize::new(80, 0)), VGA),
            Err(RenderError::DegenerateGrid { .. })
        ));
    }

    #[test]
    fn grid_larger_than_frame_is_rejected() {
        let frame = FrameDims::new(4, 4);
        assert!(matches!(
            GridGeometry::new(GridSize::new(5, 4), frame),
            Err(RenderError::BlockTooSmall { .. })
        ));
    }

    #[test]
    fn empty_frame_is_rejected() {
        assert!(GeometryResolver::new(GeometryMode::Adaptive, FrameDims::new(0, 480)).is_err());
    }

    #[test]
    fn clamped_bounds_terminal_sizes() {
        let g = GridGeometry::clamped(GridSize::new(0, 0), VGA);
        assert_eq!(g.grid, GridSize::new(1, 1));
        assert_eq!(g.block_width, 640);

        let small = FrameDims::new(10, 5);
        let g = GridGeometry::clamped(GridSize::new(300, 100), small);
        assert_eq!(g.grid, GridSize::new(10, 5));
        assert_eq!((g.block_width, g.block_height), (1, 1));
    }

    #[test]
    fn adaptive_follows_probe() {
        let mut r = GeometryResolver::new(GeometryMode::Adaptive, VGA).unwrap();
        let mut probe = || -> io::Result<GridSize> { Ok(GridSize::new(160, 48)) };
        let g = r.resolve(&mut probe).unwrap();
        assert_eq!((g.block_width, g.block_height), (4, 10));
        assert_eq!(g.frame, VGA);
    }

    #[test]
    fn fixed_ignores_probe() {
        let mut r =
            GeometryResolver::new(GeometryMode::Fixed(GridSize::new(80, 24)), VGA).unwrap();
        let mut probe = || -> io::Result<GridSize> { panic!("fixed mode must not probe") };
        let g = r.resolve(&mut probe).unwrap();
        assert_eq!(g.grid, GridSize::new(80, 24));
    }

    #[test]
    fn probe_failure_is_reported() {
        let mut r = GeometryResolver::new(GeometryMode::Adaptive, VGA).unwrap();
        assert!(matches!(
            r.resolve(&mut NoProbe),
            Err(RenderError::TerminalSize(_))
        ));
    }
}
