//! Frame sources and the capture loop.
//!
//! A frame source owns its buffers and lends each captured frame to a
//! callback for the duration of one call, then requeues the buffer. The
//! capture loop drives a source for a fixed number of frames, until it runs
//! dry, or until the first error.
//!
//! Sources provided here need no device driver:
//!
//! - [`PatternSource`]: a paced, animated synthetic test pattern
//! - [`RawSource`]: back-to-back RGB24 frames read from any `Read`
//!
//! # Example
//!
//! ```
//! use camscii_capture::{run_capture, FrameLimit, PatternSource};
//! use camscii_capture::types::FrameDims;
//!
//! let mut source = PatternSource::new(FrameDims::new(64, 48)).unwrap();
//! let mut total = 0;
//! let stats = run_capture(&mut source, FrameLimit::Count(3), |frame| {
//!     total += frame.len();
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(stats.frames, 3);
//! assert_eq!(total, 3 * 64 * 48 * 3);
//! ```

pub mod error;
pub mod pattern;
pub mod raw;
pub mod source;

pub use camscii_core as core;
pub use camscii_types as types;

pub use error::CaptureError;
pub use pattern::PatternSource;
pub use raw::RawSource;
pub use source::{run_capture, Capture, CaptureStats, FrameLimit, FrameSource, OnFrame};
