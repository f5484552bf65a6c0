//! Criterion micro-benchmarks for kernel application over cell arrays.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_arrays::{IndirectArray, RaggedArray, StridedArray};
use tessera_bench::{indirection_profile, ragged_profile, REFERENCE_CELLS};
use tessera_core::CellArray;
use tessera_kernel::{CellSum, Kernel, KernelBatch, LazyMap, QuadraticForm};

fn bench_cached_quadratic_form(c: &mut Criterion) {
    let profile = indirection_profile(REFERENCE_CELLS, 4, REFERENCE_CELLS, 11);
    let mut cells = IndirectArray::from_slice(profile.lid_to_gid, &profile.values);
    let form = QuadraticForm::identity(4);
    let mut cache = form.make_cache(&(cells.get(0),));

    c.bench_function("quadratic_form_cached_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..cells.len() {
                total += form.apply(&mut cache, (cells.get(i),));
            }
            black_box(total);
        });
    });

    c.bench_function("quadratic_form_apply_once_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..cells.len() {
                total += form.apply_once((cells.get(i),));
            }
            black_box(total);
        });
    });
}

fn bench_lazy_map(c: &mut Criterion) {
    let profile = ragged_profile(REFERENCE_CELLS, 8, 13);
    let cells = RaggedArray::from_offsets(&profile.data, &profile.offsets).unwrap();
    let mut sums = LazyMap::new(CellSum, cells);

    c.bench_function("lazy_cell_sum_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..sums.len() {
                total += *sums.get(i);
            }
            black_box(total);
        });
    });
}

fn bench_kernel_batch(c: &mut Criterion) {
    let data: Vec<f64> = (0..REFERENCE_CELLS * 3).map(|i| i as f64).collect();
    let mut cells = StridedArray::new(&data, 3).unwrap();
    let kernels = (CellSum, QuadraticForm::identity(3));
    let mut caches = kernels.make_caches(&(cells.get(0),));

    c.bench_function("batch_sum_and_norm_10k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..cells.len() {
                let (sum, norm) = kernels.apply_batch(&mut caches, (cells.get(i),));
                total += sum + norm;
            }
            black_box(total);
        });
    });
}

criterion_group!(
    benches,
    bench_cached_quadratic_form,
    bench_lazy_map,
    bench_kernel_batch
);
criterion_main!(benches);
