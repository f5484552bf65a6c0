//! Proptest strategies for well-formed tables.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::fixtures::offsets_from_lengths;

/// A ragged table in three equivalent encodings.
#[derive(Clone, Debug)]
pub struct RaggedTable {
    /// One vector per cell.
    pub nested: Vec<Vec<i32>>,
    /// All cells concatenated.
    pub data: Vec<i32>,
    /// 0-based offsets into `data`.
    pub offsets: Vec<usize>,
}

impl RaggedTable {
    /// Build every encoding from nested cells.
    pub fn from_nested(nested: Vec<Vec<i32>>) -> Self {
        let lengths: Vec<usize> = nested.iter().map(Vec::len).collect();
        let data = nested.iter().flatten().copied().collect();
        Self {
            offsets: offsets_from_lengths(&lengths, 0),
            nested,
            data,
        }
    }
}

/// Up to `max_cells` cells of up to `max_len` values each (empty cells included).
pub fn arb_ragged_table(max_cells: usize, max_len: usize) -> impl Strategy<Value = RaggedTable> {
    vec(vec(any::<i32>(), 0..=max_len), 0..=max_cells).prop_map(RaggedTable::from_nested)
}

/// An id table whose ids are all valid indices into `values`.
#[derive(Clone, Debug)]
pub struct IndirectionTable {
    /// Per-cell 0-based global ids.
    pub lid_to_gid: Vec<Vec<usize>>,
    /// Global values; never empty.
    pub values: Vec<i32>,
}

/// Up to `max_cells` cells of up to `max_len` ids into 1..=`max_values` values.
pub fn arb_indirection(
    max_cells: usize,
    max_len: usize,
    max_values: usize,
) -> impl Strategy<Value = IndirectionTable> {
    vec(any::<i32>(), 1..=max_values.max(1)).prop_flat_map(move |values| {
        let n = values.len();
        vec(vec(0..n, 0..=max_len), 0..=max_cells).prop_map(move |lid_to_gid| IndirectionTable {
            lid_to_gid,
            values: values.clone(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn ragged_encodings_agree(table in arb_ragged_table(8, 4)) {
            prop_assert_eq!(table.offsets.len(), table.nested.len() + 1);
            prop_assert_eq!(table.offsets.last().copied(), Some(table.data.len()));
        }

        #[test]
        fn indirection_ids_are_in_range(table in arb_indirection(8, 4, 10)) {
            for ids in &table.lid_to_gid {
                for &g in ids {
                    prop_assert!(g < table.values.len());
                }
            }
        }
    }
}
