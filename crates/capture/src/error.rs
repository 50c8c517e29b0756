//! Frame source error types.

use std::io;

use thiserror::Error;

/// Errors raised by frame sources (never by the renderer).
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Reading from the underlying stream failed.
    #[error("capture I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended in the middle of a frame.
    #[error("stream ended mid-frame: got {got} of {expected} bytes")]
    Truncated {
        /// Bytes read for the partial frame.
        got: usize,
        /// Bytes in a full frame.
        expected: usize,
    },

    /// Frame sources need a non-empty frame.
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDims {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}
