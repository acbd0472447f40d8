//! Benchmarks for the Saber Key Encapsulation Mechanism

use api::Kem;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use saber_kem::{FireSaber, LightSaber, Saber};

/// Benchmark LightSaber operations
fn bench_lightsaber(c: &mut Criterion) {
    let mut group = c.benchmark_group("LightSaber");
    let mut rng = ChaChaRng::seed_from_u64(42);

    group.bench_function("keygen", |b| {
        b.iter(|| {
            let _keypair = LightSaber::keypair(&mut rng).unwrap();
        });
    });

    let (pk, _) = LightSaber::keypair(&mut rng).unwrap();

    group.bench_function("encapsulate", |b| {
        b.iter(|| {
            let (_ct, _ss) = LightSaber::encapsulate(&mut rng, black_box(&pk)).unwrap();
        });
    });

    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
    let (ct, _) = LightSaber::encapsulate(&mut rng, &pk).unwrap();

    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            let _ss = LightSaber::decapsulate(black_box(&sk), black_box(&ct)).unwrap();
        });
    });

    group.finish();
}

/// Benchmark Saber operations
fn bench_saber(c: &mut Criterion) {
    let mut group = c.benchmark_group("Saber");
    let mut rng = ChaChaRng::seed_from_u64(42);

    group.bench_function("keygen", |b| {
        b.iter(|| {
            let _keypair = Saber::keypair(&mut rng).unwrap();
        });
    });

    let (pk, _) = Saber::keypair(&mut rng).unwrap();

    group.bench_function("encapsulate", |b| {
        b.iter(|| {
            let (_ct, _ss) = Saber::encapsulate(&mut rng, black_box(&pk)).unwrap();
        });
    });

    let (pk, sk) = Saber::keypair(&mut rng).unwrap();
    let (ct, _) = Saber::encapsulate(&mut rng, &pk).unwrap();

    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            let _ss = Saber::decapsulate(black_box(&sk), black_box(&ct)).unwrap();
        });
    });

    group.finish();
}

/// Benchmark FireSaber operations
fn bench_firesaber(c: &mut Criterion) {
    let mut group = c.benchmark_group("FireSaber");
    let mut rng = ChaChaRng::seed_from_u64(42);

    group.bench_function("keygen", |b| {
        b.iter(|| {
            let _keypair = FireSaber::keypair(&mut rng).unwrap();
        });
    });

    let (pk, _) = FireSaber::keypair(&mut rng).unwrap();

    group.bench_function("encapsulate", |b| {
        b.iter(|| {
            let (_ct, _ss) = FireSaber::encapsulate(&mut rng, black_box(&pk)).unwrap();
        });
    });

    let (pk, sk) = FireSaber::keypair(&mut rng).unwrap();
    let (ct, _) = FireSaber::encapsulate(&mut rng, &pk).unwrap();

    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            let _ss = FireSaber::decapsulate(black_box(&sk), black_box(&ct)).unwrap();
        });
    });

    group.finish();
}

/// Comparative benchmark across the classic Saber variants
fn bench_saber_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Saber_Comparison");
    let mut rng = ChaChaRng::seed_from_u64(42);

    for variant in ["LightSaber", "Saber", "FireSaber"].iter() {
        group.bench_with_input(
            BenchmarkId::new("full_workflow", variant),
            variant,
            |b, &variant| match variant {
                "LightSaber" => b.iter(|| {
                    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
                    let (ct, ss1) = LightSaber::encapsulate(&mut rng, &pk).unwrap();
                    let ss2 = LightSaber::decapsulate(&sk, &ct).unwrap();
                    (ss1, ss2)
                }),
                "Saber" => b.iter(|| {
                    let (pk, sk) = Saber::keypair(&mut rng).unwrap();
                    let (ct, ss1) = Saber::encapsulate(&mut rng, &pk).unwrap();
                    let ss2 = Saber::decapsulate(&sk, &ct).unwrap();
                    (ss1, ss2)
                }),
                "FireSaber" => b.iter(|| {
                    let (pk, sk) = FireSaber::keypair(&mut rng).unwrap();
                    let (ct, ss1) = FireSaber::encapsulate(&mut rng, &pk).unwrap();
                    let ss2 = FireSaber::decapsulate(&sk, &ct).unwrap();
                    (ss1, ss2)
                }),
                _ => unreachable!(),
            },
        );
    }

    group.finish();
}

criterion_group!(
    saber_benches,
    bench_lightsaber,
    bench_saber,
    bench_firesaber,
    bench_saber_comparison
);

criterion_main!(saber_benches);
