use criterion::{black_box, criterion_group, criterion_main, Criterion};
use camscii::capture::PatternSource;
use camscii::core::{
    sample_block, BlockConverter, CellBuffer, ConvertConfig, Frame, GeometryMode, GridGeometry,
    NoProbe, SampleOrder,
};
use camscii::term::encode_frame_into;
use camscii::types::{FrameDims, GridSize};

fn vga_pattern() -> (FrameDims, Vec<u8>) {
    let dims = FrameDims::new(640, 480);
    let mut buf = Vec::with_capacity(dims.byte_len());
    for y in 0..dims.height {
        for x in 0..dims.width {
            let c = PatternSource::pixel(dims, 7, x, y);
            buf.extend_from_slice(&[c.r, c.g, c.b]);
        }
    }
    (dims, buf)
}

fn bench_sample_block(c: &mut Criterion) {
    let (dims, buf) = vga_pattern();
    let geom = GridGeometry::new(GridSize::new(80, 24), dims).unwrap();
    let frame = Frame::new(&buf, dims);

    c.bench_function("sample_block_8x20", |b| {
        b.iter(|| sample_block(black_box(&frame), &geom, 40, 12, SampleOrder::RowMajor))
    });
}

fn bench_convert(c: &mut Criterion) {
    let (dims, buf) = vga_pattern();
    let mut converter = BlockConverter::new(ConvertConfig::new(
        dims,
        GeometryMode::Fixed(GridSize::new(160, 48)),
    ))
    .unwrap();
    let mut cells = CellBuffer::new(0, 0);

    c.bench_function("convert_vga_160x48", |b| {
        b.iter(|| {
            converter
                .convert_into(Frame::new(black_box(&buf), dims), &mut NoProbe, &mut cells)
                .unwrap()
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let (dims, buf) = vga_pattern();
    let mut converter = BlockConverter::new(ConvertConfig::new(
        dims,
        GeometryMode::Fixed(GridSize::new(160, 48)),
    ))
    .unwrap();
    let mut cells = CellBuffer::new(0, 0);
    converter
        .convert_into(Frame::new(&buf, dims), &mut NoProbe, &mut cells)
        .unwrap();
    let mut out = Vec::with_capacity(512 * 1024);

    c.bench_function("encode_160x48", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&cells), &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_sample_block, bench_convert, bench_encode);
criterion_main!(benches);
