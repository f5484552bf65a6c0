//! Criterion micro-benchmarks for cell-array traversal.
//!
//! Each cached container is measured against a baseline that allocates a
//! fresh `Vec` per cell.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_arrays::{ComposedIndirectArray, IndirectArray, RaggedArray, StridedArray};
use tessera_bench::{indirection_profile, ragged_profile, REFERENCE_CELLS};
use tessera_core::CellArray;

fn bench_ragged_traversal(c: &mut Criterion) {
    let profile = ragged_profile(REFERENCE_CELLS, 8, 42);
    let mut cells = RaggedArray::from_offsets(&profile.data, &profile.offsets).unwrap();

    c.bench_function("ragged_traversal_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..cells.len() {
                total += cells.get(i).iter().sum::<f64>();
            }
            black_box(total);
        });
    });

    c.bench_function("ragged_traversal_10k_to_vec", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for w in profile.offsets.windows(2) {
                let cell = profile.data[w[0]..w[1]].to_vec();
                total += cell.iter().sum::<f64>();
            }
            black_box(total);
        });
    });
}

fn bench_strided_traversal(c: &mut Criterion) {
    let data: Vec<f64> = (0..REFERENCE_CELLS * 4).map(|i| i as f64).collect();
    let mut cells = StridedArray::new(&data, 4).unwrap();

    c.bench_function("strided_traversal_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            cells.for_each_cell(|_, cell| total += cell[0]);
            black_box(total);
        });
    });
}

fn bench_indirect_gather(c: &mut Criterion) {
    let profile = indirection_profile(REFERENCE_CELLS, 4, REFERENCE_CELLS, 7);
    let mut cells = IndirectArray::from_slice(profile.lid_to_gid.clone(), &profile.values);

    c.bench_function("indirect_gather_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..cells.len() {
                total += cells.get(i).iter().sum::<f64>();
            }
            black_box(total);
        });
    });

    c.bench_function("indirect_gather_10k_collect", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for gids in &profile.lid_to_gid {
                let cell: Vec<f64> = gids.iter().map(|&g| profile.values[g]).collect();
                total += cell.iter().sum::<f64>();
            }
            black_box(total);
        });
    });
}

fn bench_composed_gather(c: &mut Criterion) {
    let inner = ragged_profile(REFERENCE_CELLS, 4, 3);
    let outer = indirection_profile(REFERENCE_CELLS / 4, 4, REFERENCE_CELLS, 5);
    let mid = RaggedArray::from_offsets(&inner.data, &inner.offsets).unwrap();
    let mut cells = ComposedIndirectArray::new(outer.lid_to_gid, mid);

    c.bench_function("composed_gather_2500", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..cells.len() {
                total += cells.get(i).iter().sum::<f64>();
            }
            black_box(total);
        });
    });
}

criterion_group!(
    benches,
    bench_ragged_traversal,
    bench_strided_traversal,
    bench_indirect_gather,
    bench_composed_gather
);
criterion_main!(benches);
