use bitsquares_lib::codec::{bits_from_coords, coords_from_bits};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let boards: Vec<String> = (0..1024)
        .map(|_| format!("{:064b}", rng.gen::<u64>()))
        .collect();
    let coord_lists: Vec<Vec<String>> = boards
        .iter()
        .map(|bits| coords_from_bits(bits).unwrap())
        .collect();

    c.bench_function("Bitstring decode speed test", |b| {
        b.iter(|| {
            for bits in &boards {
                black_box(coords_from_bits(bits).unwrap());
            }
        })
    });

    c.bench_function("Coordinate encode speed test", |b| {
        b.iter(|| {
            for coords in &coord_lists {
                black_box(bits_from_coords(coords).unwrap());
            }
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
);
criterion_main!(benches);
