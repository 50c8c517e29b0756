//! Terminal size probes.

use std::io;

use crate::core::SizeProbe;
use crate::types::GridSize;

/// Reads the controlling terminal's size with `crossterm::terminal::size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl SizeProbe for TerminalProbe {
    fn size(&mut self) -> io::Result<GridSize> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok(GridSize::new(columns, rows))
    }
}
