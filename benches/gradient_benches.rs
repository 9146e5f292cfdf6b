use criterion::{black_box, criterion_group, criterion_main, Criterion};
use range_slider_types::{gradient_to_string, string_to_gradient, ColorMap, Preset};

fn preset_map(preset: Preset) -> ColorMap {
    preset
        .stops()
        .into_iter()
        .map(|stop| (stop.position, stop.color))
        .collect()
}

fn bench_gradient_codec(c: &mut Criterion) {
    let jet = preset_map(Preset::Jet);
    let serialized = gradient_to_string(&jet);

    c.bench_function("gradient_to_string jet", |b| {
        b.iter(|| gradient_to_string(black_box(&jet)))
    });
    c.bench_function("string_to_gradient jet", |b| {
        b.iter(|| string_to_gradient(black_box(&serialized)))
    });
}

fn bench_color_at(c: &mut Criterion) {
    let jet_dark = preset_map(Preset::JetDark);

    c.bench_function("color_at 256 samples", |b| {
        b.iter(|| {
            for i in 0..256 {
                black_box(jet_dark.color_at(i as f64 / 255.0));
            }
        })
    });
}

criterion_group!(benches, bench_gradient_codec, bench_color_at);
criterion_main!(benches);
