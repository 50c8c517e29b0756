//! Synthetic test-pattern source.
//!
//! Stands in for a camera when none is available: a diagonal color gradient
//! that scrolls one step per frame, with a bright vertical bar sweeping
//! across it. Frames are paced to a target rate like a real device.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::Frame;
use crate::error::CaptureError;
use crate::source::{Capture, FrameSource, OnFrame};
use crate::types::{FrameDims, Rgb, BYTES_PER_PIXEL};

/// Buffers cycled between captures, like a driver's mmap ring.
const RING_LEN: usize = 2;

pub struct PatternSource {
    dims: FrameDims,
    ring: [Vec<u8>; RING_LEN],
    next: usize,
    tick: u32,
    interval: Option<Duration>,
    last: Option<Instant>,
}

impl PatternSource {
    pub fn new(dims: FrameDims) -> std::result::Result<Self, CaptureError> {
        if dims.pixel_count() == 0 {
            return Err(CaptureError::InvalidDims {
                width: dims.width,
                height: dims.height,
            });
        }
        Ok(Self {
            dims,
            ring: std::array::from_fn(|_| vec![0; dims.byte_len()]),
            next: 0,
            tick: 0,
            interval: None,
            last: None,
        })
    }

    /// Deliver at most `fps` frames per second (`0` disables pacing).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.interval = (fps > 0).then(|| Duration::from_secs(1) / fps);
        self
    }

    /// Color of pixel `(x, y)` at animation step `tick`.
    pub fn pixel(dims: FrameDims, tick: u32, x: u32, y: u32) -> Rgb {
        let bar_w = (dims.width / 16).max(1);
        let bar_x = tick.wrapping_mul(4) % dims.width;
        if x >= bar_x && x < bar_x + bar_w {
            return Rgb::WHITE;
        }
        let sx = (x * 255 / dims.width.max(1)) as u8;
        let sy = (y * 255 / dims.height.max(1)) as u8;
        let t = (tick % 256) as u8;
        Rgb::new(sx.wrapping_add(t), sy, 255 - sx / 2 - sy / 2)
    }

    fn paint(&mut self) {
        let dims = self.dims;
        let tick = self.tick;
        let buf = &mut self.ring[self.next];
        for (i, px) in buf.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let x = (i % dims.width as usize) as u32;
            let y = (i / dims.width as usize) as u32;
            let c = Self::pixel(dims, tick, x, y);
            px.copy_from_slice(&[c.r, c.g, c.b]);
        }
    }

    fn pace(&mut self) {
        if let (Some(interval), Some(last)) = (self.interval, self.last) {
            let elapsed = last.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

impl FrameSource for PatternSource {
    fn dims(&self) -> FrameDims {
        self.dims
    }

    fn capture(&mut self, on_frame: &mut OnFrame<'_>) -> Result<Capture> {
        self.pace();
        self.paint();
        let slot = self.next;
        self.next = (self.next + 1) % RING_LEN;
        self.tick = self.tick.wrapping_add(1);
        on_frame(Frame::new(&self.ring[slot], self.dims))?;
        Ok(Capture::Delivered)
    }
}
