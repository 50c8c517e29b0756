//! Terminal output for the block renderer.
//!
//! This crate takes the cell grids produced by `camscii-core` and writes them
//! to a terminal as raw ANSI: a full-screen clear, then one bold true-color
//! glyph per cell. It also supplies the crossterm-backed terminal size probe
//! used by adaptive geometry.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Encode into a reusable byte buffer, one write per frame
//! - Make the writer generic so output can be captured in tests

pub mod block;
pub mod renderer;
pub mod size;

pub use camscii_core as core;
pub use camscii_types as types;

pub use block::BlockRenderer;
pub use renderer::{encode_frame_into, SetBoldForeground, TerminalRenderer};
pub use size::TerminalProbe;
