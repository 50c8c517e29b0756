use std::io::Cursor;

use camscii::app;
use camscii::capture::{CaptureError, FrameLimit, PatternSource, RawSource};
use camscii::core::{ConvertConfig, GeometryMode, NoProbe, RenderError};
use camscii::term::{BlockRenderer, TerminalRenderer};
use camscii::types::{FrameDims, GridSize};

const CLEAR: &str = "\x1b[2J";

fn renderer(dims: FrameDims, grid: GridSize) -> BlockRenderer<NoProbe, Vec<u8>> {
    BlockRenderer::new(
        ConvertConfig::new(dims, GeometryMode::Fixed(grid)),
        NoProbe,
        TerminalRenderer::new(Vec::new()),
    )
    .unwrap()
}

fn output(r: BlockRenderer<NoProbe, Vec<u8>>) -> String {
    String::from_utf8(r.into_terminal().into_inner()).unwrap()
}

#[test]
fn pattern_source_renders_the_requested_frame_count() {
    let dims = FrameDims::new(64, 48);
    let mut source = PatternSource::new(dims).unwrap();
    let mut r = renderer(dims, GridSize::new(16, 12));

    let stats = app::run(&mut source, &mut r, FrameLimit::Count(5)).unwrap();
    assert_eq!(stats.frames, 5);
    assert!(!stats.exhausted);
    assert_eq!(r.frames_rendered(), 5);

    let out = output(r);
    assert_eq!(out.matches(CLEAR).count(), 5);
    assert_eq!(out.lines().count(), 5 * 12);
}

#[test]
fn raw_stream_renders_until_it_ends() {
    let dims = FrameDims::new(4, 2);
    let mut bytes = vec![0u8; dims.byte_len()];
    bytes.extend(vec![255u8; dims.byte_len()]);
    let mut source = RawSource::new(Cursor::new(bytes), dims).unwrap();
    let mut r = renderer(dims, GridSize::new(2, 1));

    let stats = app::run(&mut source, &mut r, FrameLimit::Unbounded).unwrap();
    assert_eq!(stats.frames, 2);
    assert!(stats.exhausted);

    let out = output(r);
    let frames: Vec<&str> = out.split(CLEAR).filter(|s| !s.is_empty()).collect();
    assert_eq!(
        frames,
        vec![
            "\x1b[1;38;2;0;0;0mo\x1b[0m\x1b[1;38;2;0;0;0mo\x1b[0m\n",
            "\x1b[1;38;2;255;255;255m$\x1b[0m\x1b[1;38;2;255;255;255m$\x1b[0m\n",
        ]
    );
}

#[test]
fn mismatched_source_stops_the_pipeline() {
    // Source delivers 4x2 frames, renderer expects 8x2.
    let src_dims = FrameDims::new(4, 2);
    let mut source = RawSource::new(Cursor::new(vec![0u8; src_dims.byte_len() * 3]), src_dims).unwrap();
    let mut r = renderer(FrameDims::new(8, 2), GridSize::new(2, 1));

    let err = app::run(&mut source, &mut r, FrameLimit::Count(3)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::FrameSizeMismatch { expected: 48, actual: 24 })
    ));
    assert_eq!(r.frames_rendered(), 0);
}

#[test]
fn truncated_stream_is_a_capture_error() {
    let dims = FrameDims::new(2, 2);
    let mut source = RawSource::new(Cursor::new(vec![0u8; 15]), dims).unwrap();
    let mut r = renderer(dims, GridSize::new(1, 1));

    let err = app::run(&mut source, &mut r, FrameLimit::Unbounded).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CaptureError>(),
        Some(CaptureError::Truncated { got: 3, expected: 12 })
    ));
    assert_eq!(r.frames_rendered(), 1);
}
