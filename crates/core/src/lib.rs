//! Frame-to-text conversion core - pure, deterministic, and testable
//!
//! This crate turns one packed RGB24 video frame into a grid of colored glyphs.
//! It has no dependency on the terminal backend or on any capture device:
//! the terminal size is asked for through the [`SizeProbe`] trait, and frames
//! arrive as borrowed [`Frame`] views.
//!
//! # Module Structure
//!
//! - [`frame`]: borrowed frame view and byte-count validation
//! - [`geometry`]: fixed and adaptive grid resolution, block dimensions
//! - [`sample`]: per-block channel means and BT.709 luma
//! - [`palette`]: luma to glyph quantization
//! - [`fb`]: reusable cell buffer
//! - [`convert`]: the per-frame pipeline tying the above together
//!
//! # Example
//!
//! ```
//! use camscii_core::{BlockConverter, ConvertConfig, Frame, GeometryMode, NoProbe};
//! use camscii_core::types::{FrameDims, GridSize};
//!
//! let dims = FrameDims::new(64, 32);
//! let pixels = vec![128u8; dims.byte_len()];
//!
//! let config = ConvertConfig::new(dims, GeometryMode::Fixed(GridSize::new(16, 8)));
//! let mut converter = BlockConverter::new(config).unwrap();
//! let cells = converter.convert(Frame::new(&pixels, dims), &mut NoProbe).unwrap();
//!
//! assert_eq!(cells.width(), 16);
//! assert_eq!(cells.get(0, 0).unwrap().glyph, '8');
//! ```

pub mod convert;
pub mod error;
pub mod fb;
pub mod frame;
pub mod geometry;
pub mod palette;
pub mod sample;

pub use camscii_types as types;

pub use convert::{BlockConverter, ConvertConfig};
pub use error::{RenderError, Result};
pub use fb::{Cell, CellBuffer};
pub use frame::Frame;
pub use geometry::{GeometryMode, GeometryResolver, GridGeometry, NoProbe, SizeProbe};
pub use palette::GlyphPalette;
pub use sample::{luma, sample_block, BlockSample, SampleOrder};
