//! Borrowed view over one captured RGB24 frame.

use crate::error::{RenderError, Result};
use crate::types::{FrameDims, BYTES_PER_PIXEL};

/// A non-owning view of one frame handed over by a frame source.
///
/// The lifetime ties the view to the source's buffer, so the renderer can
/// only use it for the duration of the callback that received it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    bytes: &'a [u8],
    dims: FrameDims,
}

impl<'a> Frame<'a> {
    /// Wrap `bytes` (the delivered byte count is `bytes.len()`).
    ///
    /// No validation happens here; [`Frame::validate`] is called by the
    /// converter before any pixel is read.
    pub fn new(bytes: &'a [u8], dims: FrameDims) -> Self {
        Self { bytes, dims }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check the frame against the session's dimensions `expected`.
    ///
    /// The byte count is compared first, so a source delivering frames of the
    /// wrong size reports [`RenderError::FrameSizeMismatch`]. A frame of the
    /// right size that declares other dimensions reports
    /// [`RenderError::FrameDimsChanged`].
    pub fn validate(&self, expected: FrameDims) -> Result<()> {
        if self.bytes.len() != expected.byte_len() {
            return Err(RenderError::FrameSizeMismatch {
                expected: expected.byte_len(),
                actual: self.bytes.len(),
            });
        }
        if self.dims != expected {
            return Err(RenderError::FrameDimsChanged {
                expected,
                actual: self.dims,
            });
        }
        Ok(())
    }

    /// Channels of the pixel at linear index `idx`.
    #[inline(always)]
    pub(crate) fn channels_at(&self, idx: usize) -> [u8; 3] {
        let o = idx * BYTES_PER_PIXEL;
        [self.bytes[o], self.bytes[o + 1], self.bytes[o + 2]]
    }
}
