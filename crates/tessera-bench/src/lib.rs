//! Benchmark profiles for the Tessera cell-array and kernel substrate.
//!
//! Provides deterministic, seeded table generators shared by the
//! benchmarks:
//!
//! - [`ragged_profile`]: a flat `f64` buffer with a 0-based offset table
//! - [`indirection_profile`]: a local-to-global id table and value table
//!
//! The same seed always produces the same tables.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Cell count used by the reference benchmarks.
pub const REFERENCE_CELLS: usize = 10_000;

/// Ragged tables in the layout `RaggedArray::from_offsets` expects.
#[derive(Clone, Debug)]
pub struct RaggedProfile {
    /// Concatenated cell values.
    pub data: Vec<f64>,
    /// 0-based offsets, one more than the cell count.
    pub offsets: Vec<usize>,
}

/// Indirection tables in the layout `IndirectArray::from_slice` expects.
#[derive(Clone, Debug)]
pub struct IndirectionProfile {
    /// Global ids per cell.
    pub lid_to_gid: Vec<Vec<usize>>,
    /// Global values.
    pub values: Vec<f64>,
}

/// Build `cells` cells of 1 to `max_len` values each.
pub fn ragged_profile(cells: usize, max_len: usize, seed: u64) -> RaggedProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut offsets = Vec::with_capacity(cells + 1);
    offsets.push(0);
    let mut data = Vec::new();
    for _ in 0..cells {
        let len = rng.random_range(1..=max_len.max(1));
        data.extend((0..len).map(|_| rng.random::<f64>()));
        offsets.push(data.len());
    }
    RaggedProfile { data, offsets }
}

/// Build `cells` cells of `per_cell` ids each into a table of `globals`
/// values.
///
/// # Panics
///
/// Panics if `globals` is zero while `per_cell` is not.
pub fn indirection_profile(
    cells: usize,
    per_cell: usize,
    globals: usize,
    seed: u64,
) -> IndirectionProfile {
    assert!(
        globals > 0 || per_cell == 0,
        "cannot draw global ids from an empty value table"
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..globals).map(|_| rng.random::<f64>()).collect();
    let lid_to_gid = (0..cells)
        .map(|_| (0..per_cell).map(|_| rng.random_range(0..globals)).collect())
        .collect();
    IndirectionProfile { lid_to_gid, values }
}
