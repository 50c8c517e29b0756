//! Raw RGB24 stream source.
//!
//! Reads back-to-back frames of exactly `3 * width * height` bytes from any
//! reader, e.g. stdin fed by
//! `ffmpeg -f v4l2 -i /dev/video0 -f rawvideo -pix_fmt rgb24 -s 640x480 -`.

use std::io::{ErrorKind, Read};

use anyhow::Result;
use log::trace;

use crate::core::Frame;
use crate::error::CaptureError;
use crate::source::{Capture, FrameSource, OnFrame};
use crate::types::FrameDims;

pub struct RawSource<R: Read> {
    reader: R,
    dims: FrameDims,
    buf: Vec<u8>,
}

impl<R: Read> RawSource<R> {
    pub fn new(reader: R, dims: FrameDims) -> std::result::Result<Self, CaptureError> {
        if dims.pixel_count() == 0 {
            return Err(CaptureError::InvalidDims {
                width: dims.width,
                height: dims.height,
            });
        }
        Ok(Self {
            reader,
            dims,
            buf: vec![0; dims.byte_len()],
        })
    }

    /// Fill the buffer with one frame.
    ///
    /// Returns `Ok(false)` on a clean end of stream (no bytes of a new frame).
    fn fill(&mut self) -> std::result::Result<bool, CaptureError> {
        let mut got = 0;
        while got < self.buf.len() {
            match self.reader.read(&mut self.buf[got..]) {
                Ok(0) => break,
                Ok(n) => got += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if got == 0 {
            return Ok(false);
        }
        if got < self.buf.len() {
            return Err(CaptureError::Truncated {
                got,
                expected: self.buf.len(),
            });
        }
        Ok(true)
    }
}

impl<R: Read> FrameSource for RawSource<R> {
    fn dims(&self) -> FrameDims {
        self.dims
    }

    fn capture(&mut self, on_frame: &mut OnFrame<'_>) -> Result<Capture> {
        if !self.fill()? {
            return Ok(Capture::Exhausted);
        }
        trace!("read {} byte frame", self.buf.len());
        on_frame(Frame::new(&self.buf, self.dims))?;
        Ok(Capture::Delivered)
    }
}
