//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the pipeline.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the sampler, the terminal encoder and the frame sources.
//!
//! # Pixel Format
//!
//! Frames are packed RGB24: three bytes per pixel (R, G, B), rows stored one
//! after another with no padding. A frame of `width x height` pixels is
//! exactly `3 * width * height` bytes.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAME_WIDTH` | 640 | Capture width in pixels |
//! | `DEFAULT_FRAME_HEIGHT` | 480 | Capture height in pixels |
//! | `DEFAULT_FRAME_COUNT` | 100 | Frames rendered before the loop stops |
//! | `DEFAULT_PALETTE` | `oO8$` | Glyphs from dark to bright |
//! | `FALLBACK_COLUMNS` | 80 | Grid width when no terminal is attached |
//! | `FALLBACK_ROWS` | 24 | Grid height when no terminal is attached |
//!
//! # Luma
//!
//! Brightness uses the ITU-R BT.709 weights:
//!
//! ```
//! use camscii_types::{LUMA_B, LUMA_G, LUMA_R};
//!
//! let sum = LUMA_R + LUMA_G + LUMA_B;
//! assert!((sum - 1.0).abs() < 1e-6);
//! ```

use std::fmt;

/// Bytes per packed RGB24 pixel.
pub const BYTES_PER_PIXEL: usize = 3;

/// Default capture width in pixels.
pub const DEFAULT_FRAME_WIDTH: u32 = 640;

/// Default capture height in pixels.
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// Number of frames captured before the loop stops.
pub const DEFAULT_FRAME_COUNT: u32 = 100;

/// Glyphs ordered by increasing perceived brightness.
pub const DEFAULT_PALETTE: &str = "oO8$";

/// Grid width used when stdout is not a terminal and no grid was given.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Grid height used when stdout is not a terminal and no grid was given.
pub const FALLBACK_ROWS: u16 = 24;

/// Pacing of the synthetic pattern source.
pub const DEFAULT_PATTERN_FPS: u32 = 30;

/// BT.709 red weight.
pub const LUMA_R: f32 = 0.2126;

/// BT.709 green weight.
pub const LUMA_G: f32 = 0.7152;

/// BT.709 blue weight.
pub const LUMA_B: f32 = 0.0722;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// Pixel dimensions of a captured frame.
///
/// Fixed for the lifetime of a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameDims {
    pub width: u32,
    pub height: u32,
}

impl FrameDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Exact RGB24 byte length of one frame.
    ///
    /// ```
    /// use camscii_types::FrameDims;
    ///
    /// assert_eq!(FrameDims::new(640, 480).byte_len(), 921_600);
    /// ```
    pub const fn byte_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

impl fmt::Display for FrameDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Default for FrameDims {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)
    }
}

/// Output grid size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub columns: u16,
    pub rows: u16,
}

impl GridSize {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    pub const fn cell_count(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }

    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(FALLBACK_COLUMNS, FALLBACK_ROWS)
    }
}
