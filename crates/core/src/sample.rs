//! Block sampler: reduces one block of pixels to a mean color and a luma.

use crate::error::{RenderError, Result};
use crate::frame::Frame;
use crate::geometry::GridGeometry;
use crate::types::{Rgb, BYTES_PER_PIXEL, LUMA_B, LUMA_G, LUMA_R};

/// Pixel addressing used when walking a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleOrder {
    /// Cell `(col, row)` covers columns `col*bw..col*bw+bw` and rows
    /// `row*bh..row*bh+bh` of a row-major frame.
    #[default]
    RowMajor,
    /// Legacy addressing with the row and column roles swapped.
    ///
    /// Walks `yy` in `col*bw..col*bw+bh` and `xx` in `row*bh..row*bh+bw`,
    /// reading the pixel at `frame_width * xx + yy`. Identical to
    /// [`SampleOrder::RowMajor`] for square blocks; otherwise each block's
    /// width and height trade places and the image is distorted.
    Transposed,
}

impl SampleOrder {
    /// Make sure every block of `geom` can be read from a frame of
    /// `frame_len` bytes.
    ///
    /// Row-major blocks always lie inside the frame. Transposed blocks can
    /// run past its end.
    pub fn check_bounds(&self, geom: &GridGeometry, frame_len: usize) -> Result<()> {
        let SampleOrder::Transposed = self else {
            return Ok(());
        };
        if geom.block_pixel_count() == 0 {
            return Ok(());
        }

        let bw = geom.block_width as usize;
        let bh = geom.block_height as usize;
        let xx_max = (usize::from(geom.rows()) - 1) * bh + bw - 1;
        let yy_max = (usize::from(geom.columns()) - 1) * bw + bh - 1;
        let needed = (geom.frame.width as usize * xx_max + yy_max + 1) * BYTES_PER_PIXEL;
        if needed > frame_len {
            return Err(RenderError::SampleOutOfBounds {
                needed,
                available: frame_len,
            });
        }
        Ok(())
    }
}

/// Mean color and luma of one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSample {
    /// Per-channel means, floored.
    pub color: Rgb,
    /// BT.709 luma of the unfloored means, in `[0, 255]`.
    pub luma: f32,
}

/// BT.709 luma of a color given as channel means.
pub fn luma(r: f64, g: f64, b: f64) -> f32 {
    let y = f64::from(LUMA_R) * r + f64::from(LUMA_G) * g + f64::from(LUMA_B) * b;
    (y as f32).clamp(0.0, 255.0)
}

/// Sample cell `(col, row)` of `frame`.
///
/// `frame` must already be validated against `geom`, and for
/// [`SampleOrder::Transposed`] the bounds checked with
/// [`SampleOrder::check_bounds`]; otherwise this may panic on an
/// out-of-range index.
pub fn sample_block(
    frame: &Frame<'_>,
    geom: &GridGeometry,
    col: u16,
    row: u16,
    order: SampleOrder,
) -> BlockSample {
    let bw = geom.block_width as usize;
    let bh = geom.block_height as usize;
    let stride = geom.frame.width as usize;

    let mut sum = [0u64; 3];
    let mut add = |idx: usize| {
        let px = frame.channels_at(idx);
        sum[0] += u64::from(px[0]);
        sum[1] += u64::from(px[1]);
        sum[2] += u64::from(px[2]);
    };

    match order {
        SampleOrder::RowMajor => {
            let x0 = usize::from(col) * bw;
            let y0 = usize::from(row) * bh;
            for y in y0..y0 + bh {
                let line = y * stride;
                for x in x0..x0 + bw {
                    add(line + x);
                }
            }
        }
        SampleOrder::Transposed => {
            let start_x = usize::from(row) * bh;
            let start_y = usize::from(col) * bw;
            for yy in start_y..start_y + bh {
                for xx in start_x..start_x + bw {
                    add(stride * xx + yy);
                }
            }
        }
    }

    let n = (bw * bh) as u64;
    if n == 0 {
        return BlockSample {
            color: Rgb::BLACK,
            luma: 0.0,
        };
    }

    let mean = |s: u64| s as f64 / n as f64;
    let floor = |s: u64| (s / n).min(255) as u8;
    BlockSample {
        color: Rgb::new(floor(sum[0]), floor(sum[1]), floor(sum[2])),
        luma: luma(mean(sum[0]), mean(sum[1]), mean(sum[2])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FrameDims, GridSize};

    fn frame_from_fn(dims: FrameDims, f: impl Fn(u32, u32) -> Rgb) -> Vec<u8> {
        let mut buf = Vec::with_capacity(dims.byte_len());
        for y in 0..dims.height {
            for x in 0..dims.width {
                let c = f(x, y);
                buf.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
        buf
    }

    #[test]
    fn mean_is_floored_arithmetic_mean() {
        let dims = FrameDims::new(2, 1);
        let buf = frame_from_fn(dims, |x, _| if x == 0 { Rgb::new(10, 0, 255) } else { Rgb::new(11, 1, 254) });
        let frame = Frame::new(&buf, dims);
        let geom = GridGeometry::new(GridSize::new(1, 1), dims).unwrap();

        let s = sample_block(&frame, &geom, 0, 0, SampleOrder::RowMajor);
        assert_eq!(s.color, Rgb::new(10, 0, 254));
        let expected = luma(10.5, 0.5, 254.5);
        assert!((s.luma - expected).abs() < 1e-4);

        // Same input, same output.
        assert_eq!(s, sample_block(&frame, &geom, 0, 0, SampleOrder::RowMajor));
    }

    #[test]
    fn luma_extremes() {
        assert_eq!(luma(0.0, 0.0, 0.0), 0.0);
        let white = luma(255.0, 255.0, 255.0);
        assert!(white <= 255.0 && white > 254.99);
        assert!((luma(0.0, 255.0, 0.0) - 0.7152 * 255.0).abs() < 1e-3);
    }

    #[test]
    fn row_major_samples_the_right_block() {
        // 4x2 frame, 2x1 grid: left half red, right half blue.
        let dims = FrameDims::new(4, 2);
        let buf = frame_from_fn(dims, |x, _| if x < 2 { Rgb::new(255, 0, 0) } else { Rgb::new(0, 0, 255) });
        let frame = Frame::new(&buf, dims);
        let geom = GridGeometry::new(GridSize::new(2, 1), dims).unwrap();

        assert_eq!(sample_block(&frame, &geom, 0, 0, SampleOrder::RowMajor).color, Rgb::new(255, 0, 0));
        assert_eq!(sample_block(&frame, &geom, 1, 0, SampleOrder::RowMajor).color, Rgb::new(0, 0, 255));
    }

    #[test]
    fn remainder_pixels_are_ignored() {
        // 5x1 frame on a 2x1 grid: blocks are 2 px wide, pixel 4 is never read.
        let dims = FrameDims::new(5, 1);
        let buf = frame_from_fn(dims, |x, _| if x == 4 { Rgb::WHITE } else { Rgb::BLACK });
        let frame = Frame::new(&buf, dims);
        let geom = GridGeometry::new(GridSize::new(2, 1), dims).unwrap();

        assert_eq!(sample_block(&frame, &geom, 1, 0, SampleOrder::RowMajor).color, Rgb::BLACK);
    }

    #[test]
    fn transposed_matches_row_major_for_square_blocks() {
        let dims = FrameDims::new(8, 8);
        let buf = frame_from_fn(dims, |x, y| Rgb::new((x * 30) as u8, (y * 20) as u8, (x * y) as u8));
        let frame = Frame::new(&buf, dims);
        let geom = GridGeometry::new(GridSize::new(4, 4), dims).unwrap();
        SampleOrder::Transposed.check_bounds(&geom, buf.len()).unwrap();

        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(
                    sample_block(&frame, &geom, col, row, SampleOrder::Transposed),
                    sample_block(&frame, &geom, col, row, SampleOrder::RowMajor)
                );
            }
        }
    }

    #[test]
    fn transposed_swaps_block_extents() {
        // 4x4 frame on a 4x2 grid: blocks are 1 px wide and 2 px tall.
        // Only pixel (1, 0) is white.
        let dims = FrameDims::new(4, 4);
        let buf = frame_from_fn(dims, |x, y| if x == 1 && y == 0 { Rgb::WHITE } else { Rgb::BLACK });
        let frame = Frame::new(&buf, dims);
        let geom = GridGeometry::new(GridSize::new(4, 2), dims).unwrap();
        SampleOrder::Transposed.check_bounds(&geom, buf.len()).unwrap();

        // Row-major cell (0, 0) is the vertical strip x=0, y=0..2.
        assert_eq!(sample_block(&frame, &geom, 0, 0, SampleOrder::RowMajor).color, Rgb::BLACK);
        // Legacy cell (0, 0) is the horizontal strip y=0, x=0..2.
        assert_eq!(
            sample_block(&frame, &geom, 0, 0, SampleOrder::Transposed).color,
            Rgb::gray(127)
        );
    }

    #[test]
    fn transposed_bounds_check() {
        let vga = FrameDims::new(640, 480);
        // 80x24 on VGA: blocks 8x20, last read is inside the frame.
        let geom = GridGeometry::new(GridSize::new(80, 24), vga).unwrap();
        assert!(SampleOrder::Transposed.check_bounds(&geom, vga.byte_len()).is_ok());

        // Wide blocks: the row index runs past the last line.
        let dims = FrameDims::new(40, 4);
        let geom = GridGeometry::new(GridSize::new(1, 1), dims).unwrap();
        assert!(matches!(
            SampleOrder::Transposed.check_bounds(&geom, dims.byte_len()),
            Err(RenderError::SampleOutOfBounds { .. })
        ));
        assert!(SampleOrder::RowMajor.check_bounds(&geom, dims.byte_len()).is_ok());
    }
}
