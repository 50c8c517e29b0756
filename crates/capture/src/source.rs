//! The frame source seam and the capture loop driving it.

use anyhow::Result;
use log::{debug, info};

use crate::core::Frame;
use crate::types::FrameDims;

/// Callback receiving each captured frame.
///
/// The frame borrows the source's buffer and is only valid for the call.
pub type OnFrame<'cb> = dyn for<'f> FnMut(Frame<'f>) -> Result<()> + 'cb;

/// Outcome of one [`FrameSource::capture`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// A frame was handed to the callback and the buffer requeued.
    Delivered,
    /// The source has no more frames.
    Exhausted,
}

/// A producer of packed RGB24 frames.
pub trait FrameSource {
    /// Dimensions of every frame this source delivers.
    fn dims(&self) -> FrameDims;

    /// Block until a frame is available, pass it to `on_frame`, then make the
    /// buffer available for the next capture.
    ///
    /// Errors from `on_frame` are returned unchanged.
    fn capture(&mut self, on_frame: &mut OnFrame<'_>) -> Result<Capture>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn dims(&self) -> FrameDims {
        (**self).dims()
    }

    fn capture(&mut self, on_frame: &mut OnFrame<'_>) -> Result<Capture> {
        (**self).capture(on_frame)
    }
}

/// When the capture loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLimit {
    /// Stop after this many frames (or earlier if the source runs out).
    Count(u32),
    /// Run until the source is exhausted.
    Unbounded,
}

impl FrameLimit {
    /// `0` means unbounded.
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            FrameLimit::Unbounded
        } else {
            FrameLimit::Count(count)
        }
    }

    fn reached(&self, frames: u64) -> bool {
        match *self {
            FrameLimit::Count(n) => frames >= u64::from(n),
            FrameLimit::Unbounded => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureStats {
    pub frames: u64,
    pub exhausted: bool,
}

/// Repeatedly capture from `source`, handing each frame to `on_frame`.
///
/// Stops when `limit` is reached, when the source is exhausted, or on the
/// first error (from the source or the callback), which is returned.
pub fn run_capture<S, F>(source: &mut S, limit: FrameLimit, mut on_frame: F) -> Result<CaptureStats>
where
    S: FrameSource + ?Sized,
    F: FnMut(Frame<'_>) -> Result<()>,
{
    let dims = source.dims();
    info!(
        "capturing {}x{} frames ({:?})",
        dims.width, dims.height, limit
    );

    let mut stats = CaptureStats::default();
    while !limit.reached(stats.frames) {
        match source.capture(&mut on_frame)? {
            Capture::Delivered => stats.frames += 1,
            Capture::Exhausted => {
                debug!("source exhausted after {} frames", stats.frames);
                stats.exhausted = true;
                break;
            }
        }
    }

    info!("capture finished: {} frames", stats.frames);
    Ok(stats)
}
