use criterion::{criterion_group, criterion_main, Criterion};
use lenscalc::{lens::glass_weight, millimeter, AsphericCoefficients, Lens};

fn criterion_spherical(c: &mut Criterion) {
    c.bench_function("glass weight spherical", |b| {
        b.iter(|| glass_weight(Some(100.0), Some(-100.0), 8.0, 2.5, 40.0, 40.0, 45.0, None, None))
    });
}

fn criterion_aspheric(c: &mut Criterion) {
    let lens = Lens::new(
        Some(millimeter!(50.0)),
        Some(millimeter!(-60.0)),
        millimeter!(6.0),
        1.5,
    )
    .unwrap()
    .with_apertures(millimeter!(45.0), millimeter!(45.0), millimeter!(45.0))
    .unwrap()
    .with_coefficients(
        AsphericCoefficients::new(-0.5).with_a4(1e-6).with_a6(-2e-9),
        AsphericCoefficients::new(-0.8).with_a4(-2e-6),
    )
    .unwrap();
    c.bench_function("glass weight aspheric", |b| b.iter(|| lens.weight()));
}

criterion_group!(benches, criterion_spherical, criterion_aspheric);
criterion_main!(benches);
