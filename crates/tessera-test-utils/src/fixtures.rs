//! Reference tables shared by container and kernel tests.
//!
//! - [`ragged_one_based`]: five values split `[2, 1, 2]` by a 1-based offset table.
//! - [`one_to_ten`]: `1..=10`, the strided-array reference buffer.
//! - [`indirect_tables`]: two overlapping cells over a three-value table.
//! - [`signed_tables`]: one cell mixing a positive and a negative id.

/// Data `[10, 20, 30, 40, 50]` with 1-based offsets `[1, 3, 4, 6]`.
pub fn ragged_one_based() -> (Vec<i32>, Vec<usize>) {
    (vec![10, 20, 30, 40, 50], vec![1, 3, 4, 6])
}

/// The values `1..=10`.
pub fn one_to_ten() -> Vec<i32> {
    (1..=10).collect()
}

/// Local ids `[[0, 1], [1, 2]]` over global values `[100, 200, 300]`.
pub fn indirect_tables() -> (Vec<Vec<usize>>, Vec<i32>) {
    (vec![vec![0, 1], vec![1, 2]], vec![100, 200, 300])
}

/// Signed ids `[[1, -2]]`, positive values `[1, 2]`, negative values `[9, 8]`.
pub fn signed_tables() -> (Vec<Vec<i64>>, Vec<i32>, Vec<i32>) {
    (vec![vec![1, -2]], vec![1, 2], vec![9, 8])
}

/// Build an offset table with the given `base` from per-cell lengths.
pub fn offsets_from_lengths(lengths: &[usize], base: usize) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(lengths.len() + 1);
    let mut at = base;
    offsets.push(at);
    for len in lengths {
        at += len;
        offsets.push(at);
    }
    offsets
}
