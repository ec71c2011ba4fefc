//! Criterion benchmarks for the encoders and renderers.

use barust::helper::{to_image_buffer, to_svg_string, RenderOptions};
use barust::{encode, Symbology};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_symbologies(c: &mut Criterion) {
    let cases = [
        (Symbology::Code128, "1234567890abcABC-283*33"),
        (Symbology::Ean13, "081231723897"),
        (Symbology::Code39Extended, "1234567890abcABC"),
        (Symbology::Code93, "1234567890abcABC"),
        (Symbology::Interleaved2of5Checksum, "1234567890"),
        (Symbology::Postnet, "555551237"),
        (Symbology::Imb, "01234567094987654321-01234567891"),
        (Symbology::PharmacodeTwoTracks, "64570080"),
    ];

    let mut group = c.benchmark_group("encode");
    for (symbology, payload) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(symbology.id()), payload, |b, payload| {
            b.iter(|| encode(black_box(payload), symbology))
        });
    }
    group.finish();
}

fn bench_code128_planner(c: &mut Criterion) {
    let mixed: String = (0..64)
        .map(|i| if i % 8 < 5 { char::from(b'0' + i % 10) } else { 'x' })
        .collect();
    c.bench_function("code128_mixed_64", |b| {
        b.iter(|| encode(black_box(&mixed), Symbology::Code128))
    });
}

fn bench_render(c: &mut Criterion) {
    let seq = encode("1234567890abcABC-283*33", Symbology::Code128).unwrap();
    let opts = RenderOptions::default();

    c.bench_function("render_svg", |b| b.iter(|| to_svg_string(black_box(&seq), &opts)));
    c.bench_function("render_image", |b| b.iter(|| to_image_buffer(black_box(&seq), &opts)));
}

criterion_group!(benches, bench_symbologies, bench_code128_planner, bench_render);
criterion_main!(benches);
