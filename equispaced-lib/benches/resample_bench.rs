use criterion::{Criterion, black_box, criterion_group, criterion_main};
use equispaced::{ResampleOptions, Variant, resample};

/// Spectrum-like signal with jittered spacing.
fn spectrum(len: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..len)
        .map(|i| i as f64 + 0.3 * ((i as f64) * 0.7).sin())
        .collect();
    let y = x
        .iter()
        .map(|&v| (-(v - len as f64 / 2.0).powi(2) / 5000.0).exp() + 0.05 * (v * 0.1).cos())
        .collect();
    (x, y)
}

fn bench_variants(c: &mut Criterion) {
    let (x, y) = spectrum(10_000);

    for variant in [Variant::Smooth, Variant::Slot, Variant::Unit] {
        let opts = ResampleOptions::new()
            .number_of_points(4096)
            .variant(variant);
        c.bench_function(&format!("resample_{variant}_10k_to_4096"), |b| {
            b.iter(|| {
                black_box(resample(black_box(&x), black_box(&y), black_box(&opts)).unwrap());
            });
        });
    }
}

fn bench_upsample(c: &mut Criterion) {
    let (x, y) = spectrum(500);
    let opts = ResampleOptions::new().number_of_points(50_000);

    c.bench_function("resample_smooth_500_to_50k", |b| {
        b.iter(|| {
            black_box(resample(black_box(&x), black_box(&y), black_box(&opts)).unwrap());
        });
    });
}

criterion_group!(benches, bench_variants, bench_upsample);
criterion_main!(benches);
