//! Render error types.

use std::io;

use thiserror::Error;

use crate::types::FrameDims;

/// Errors that can occur while converting a frame into cells.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The delivered byte count does not match `3 * width * height`.
    ///
    /// This means capture and renderer disagree on the frame format; the
    /// pipeline cannot continue safely.
    #[error("frame size mismatch: expected {expected} bytes, got {actual}")]
    FrameSizeMismatch {
        /// Bytes implied by the declared frame dimensions.
        expected: usize,
        /// Bytes actually delivered.
        actual: usize,
    },

    /// A frame arrived with dimensions other than the ones the renderer was
    /// configured for.
    #[error("frame dimensions changed from {expected} to {actual}")]
    FrameDimsChanged {
        /// Configured dimensions.
        expected: FrameDims,
        /// Dimensions declared by the frame.
        actual: FrameDims,
    },

    /// The grid has zero columns or zero rows.
    #[error("degenerate grid: {columns}x{rows}")]
    DegenerateGrid {
        /// Requested columns.
        columns: u16,
        /// Requested rows.
        rows: u16,
    },

    /// The grid is larger than the frame, leaving blocks with no pixels.
    #[error("grid {columns}x{rows} is larger than frame {width}x{height}")]
    BlockTooSmall {
        /// Requested columns.
        columns: u16,
        /// Requested rows.
        rows: u16,
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
    },

    /// A glyph palette must contain at least one character.
    #[error("glyph palette is empty")]
    EmptyPalette,

    /// Transposed sampling would read past the end of the frame.
    #[error("transposed sampling reaches byte {needed} of a {available}-byte frame")]
    SampleOutOfBounds {
        /// One past the highest byte offset the sampler would touch.
        needed: usize,
        /// Frame length in bytes.
        available: usize,
    },

    /// The live terminal size could not be queried.
    #[error("terminal size unavailable: {0}")]
    TerminalSize(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
