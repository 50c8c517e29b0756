//! camscii (workspace facade crate).
//!
//! Re-exports the pipeline crates under one roof as
//! `camscii::{capture,core,term,types}` and hosts the command-line layer in
//! [`app`]. The implementation lives in dedicated crates under `crates/`.

pub mod app;

pub use camscii_capture as capture;
pub use camscii_core as core;
pub use camscii_term as term;
pub use camscii_types as types;
