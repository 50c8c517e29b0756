//! TerminalRenderer: flushes converted cells to a real terminal.
//!
//! Every frame is a full repaint: clear the display, then one bold true-color
//! glyph per cell, with a newline after each row. There is no diffing.

use std::fmt;
use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, Command, QueueableCommand,
};

use crate::core::CellBuffer;
use crate::types::Rgb;

/// Bold true-color foreground as one SGR sequence: `ESC[1;38;2;R;G;Bm`.
///
/// crossterm's `SetForegroundColor` and `SetAttribute(Bold)` would emit two
/// separate sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBoldForeground(pub Rgb);

impl Command for SetBoldForeground {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[1;38;2;{};{};{}m", self.0.r, self.0.g, self.0.b)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "true-color glyphs need an ANSI terminal",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Hide the cursor for the duration of the session.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore attributes and the cursor.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Encode and write one full frame.
    ///
    /// The whole frame goes out in a single write so no cell's escape
    /// sequences are split.
    pub fn draw(&mut self, cells: &CellBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(cells, &mut self.buf)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Bytes of the most recent `draw`, `enter` or `exit`.
    pub fn last_output(&self) -> &[u8] {
        &self.buf
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame repaint into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(cells: &CellBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for row in cells.rows() {
        for cell in row {
            encode_cell_into(out, cell.glyph, cell.color)?;
        }
        out.queue(Print('\n'))?;
    }
    Ok(())
}

fn encode_cell_into(out: &mut Vec<u8>, glyph: char, color: Rgb) -> Result<()> {
    out.queue(SetBoldForeground(color))?;
    out.queue(Print(glyph))?;
    out.queue(ResetColor)?;
    Ok(())
}
