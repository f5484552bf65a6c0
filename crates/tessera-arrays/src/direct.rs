//! Pass-through containers over flat and nested storage.

use tessera_core::traits::check_cell_index;
use tessera_core::{AccessPattern, CellArray};

/// A borrowed flat array; cell `i` is `data[i]`.
///
/// Indirection containers wrap raw global value slices in a `FlatArray`.
#[derive(Clone, Copy, Debug)]
pub struct FlatArray<'d, T> {
    data: &'d [T],
}

impl<'d, T> FlatArray<'d, T> {
    /// Wrap a slice.
    pub fn new(data: &'d [T]) -> Self {
        Self { data }
    }

    /// The wrapped slice.
    pub fn as_slice(&self) -> &'d [T] {
        self.data
    }
}

impl<'d, T> From<&'d [T]> for FlatArray<'d, T> {
    fn from(data: &'d [T]) -> Self {
        Self::new(data)
    }
}

impl<T> CellArray for FlatArray<'_, T> {
    type Cell = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&mut self, index: usize) -> &T {
        check_cell_index(index, self.data.len());
        &self.data[index]
    }
}

/// A borrowed array of arrays; cell `i` is the inner slice `data[i]`.
///
/// The inner vectors already own independent storage, so no scratch view
/// is needed. The maximum inner length is computed once at construction
/// and reported as the cell size.
#[derive(Clone, Copy, Debug)]
pub struct NestedArray<'d, T> {
    data: &'d [Vec<T>],
    max_inner: usize,
}

impl<'d, T> NestedArray<'d, T> {
    /// Wrap a slice of vectors.
    pub fn new(data: &'d [Vec<T>]) -> Self {
        let max_inner = data.iter().map(Vec::len).max().unwrap_or(0);
        tracing::debug!(cells = data.len(), max_inner, "nested array");
        Self { data, max_inner }
    }

    /// Total number of inner elements across all cells.
    pub fn total_len(&self) -> usize {
        self.data.iter().map(Vec::len).sum()
    }
}

impl<T> CellArray for NestedArray<'_, T> {
    type Cell = [T];

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&mut self, index: usize) -> &[T] {
        check_cell_index(index, self.data.len());
        &self.data[index]
    }

    fn access_pattern(&self) -> AccessPattern {
        AccessPattern::Cartesian
    }

    fn cell_size(&self) -> Option<usize> {
        Some(self.max_inner)
    }
}
