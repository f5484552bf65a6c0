//! Cell arrays whose cells are kernel outputs, computed on access.
//!
//! A [`LazyMap`] pairs a kernel with a cell array. Cell `i` is the kernel
//! applied to cell `i` of the inner array, recomputed on every `get` with
//! a single cache created from the first cell accessed. [`LazyMap2`] does
//! the same over two arrays of equal length.

use tessera_core::{AccessPattern, ArrayError, CellArray};

use crate::kernel::Kernel;

/// `kernel(array[i])` for every cell `i`.
///
/// `C` and `O` are the kernel's cache and output types; they are inferred
/// from the kernel and never need to be written out.
///
/// ```
/// use tessera_arrays::RaggedArray;
/// use tessera_core::CellArray;
/// use tessera_kernel::{CellSum, LazyMap};
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// let offsets = [0, 1, 4];
/// let cells = RaggedArray::from_offsets(&data, &offsets).unwrap();
/// let mut sums = LazyMap::new(CellSum, cells);
/// assert_eq!(*sums.get(0), 1.0);
/// assert_eq!(*sums.get(1), 9.0);
/// ```
#[derive(Clone, Debug)]
pub struct LazyMap<K, A, C, O> {
    kernel: K,
    array: A,
    cache: Option<C>,
    value: Option<O>,
}

impl<K, A, C, O> LazyMap<K, A, C, O>
where
    A: CellArray,
    K: for<'x> Kernel<(&'x A::Cell,), Cache = C, Output = O>,
{
    /// Map `kernel` over the cells of `array`.
    pub fn new(kernel: K, array: A) -> Self {
        tracing::debug!(cells = array.len(), "lazy map");
        Self {
            kernel,
            array,
            cache: None,
            value: None,
        }
    }
}

impl<K, A, C, O> LazyMap<K, A, C, O> {
    /// The mapped kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The inner array.
    pub fn inner(&self) -> &A {
        &self.array
    }

    /// Whether the kernel cache has been created yet.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Give back the kernel and the inner array, dropping the cache.
    pub fn into_parts(self) -> (K, A) {
        (self.kernel, self.array)
    }
}

impl<K, A, C, O> CellArray for LazyMap<K, A, C, O>
where
    A: CellArray,
    K: for<'x> Kernel<(&'x A::Cell,), Cache = C, Output = O>,
{
    type Cell = O;

    fn len(&self) -> usize {
        self.array.len()
    }

    fn get(&mut self, index: usize) -> &O {
        let cell = self.array.get(index);
        let kernel = &self.kernel;
        let cache = self.cache.get_or_insert_with(|| {
            tracing::trace!(index, "creating kernel cache");
            kernel.make_cache(&(cell,))
        });
        let out = kernel.apply(cache, (cell,));
        &*self.value.insert(out)
    }

    fn access_pattern(&self) -> AccessPattern {
        self.array.access_pattern()
    }
}

/// `kernel(left[i], right[i])` for every cell `i` of two equally long
/// arrays.
#[derive(Clone, Debug)]
pub struct LazyMap2<K, A, B, C, O> {
    kernel: K,
    left: A,
    right: B,
    cache: Option<C>,
    value: Option<O>,
}

impl<K, A, B, C, O> LazyMap2<K, A, B, C, O>
where
    A: CellArray,
    B: CellArray,
    K: for<'x, 'y> Kernel<(&'x A::Cell, &'y B::Cell), Cache = C, Output = O>,
{
    /// Map `kernel` over the zipped cells of `left` and `right`.
    pub fn new(kernel: K, left: A, right: B) -> Result<Self, ArrayError> {
        if left.len() != right.len() {
            return Err(ArrayError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        tracing::debug!(cells = left.len(), "lazy map over zipped arrays");
        Ok(Self {
            kernel,
            left,
            right,
            cache: None,
            value: None,
        })
    }
}

impl<K, A, B, C, O> LazyMap2<K, A, B, C, O> {
    /// The mapped kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Give back the kernel and both inner arrays, dropping the cache.
    pub fn into_parts(self) -> (K, A, B) {
        (self.kernel, self.left, self.right)
    }
}

impl<K, A, B, C, O> CellArray for LazyMap2<K, A, B, C, O>
where
    A: CellArray,
    B: CellArray,
    K: for<'x, 'y> Kernel<(&'x A::Cell, &'y B::Cell), Cache = C, Output = O>,
{
    type Cell = O;

    fn len(&self) -> usize {
        self.left.len()
    }

    fn get(&mut self, index: usize) -> &O {
        let x = self.left.get(index);
        let y = self.right.get(index);
        let kernel = &self.kernel;
        let cache = self.cache.get_or_insert_with(|| kernel.make_cache(&(x, y)));
        let out = kernel.apply(cache, (x, y));
        &*self.value.insert(out)
    }

    fn access_pattern(&self) -> AccessPattern {
        match (self.left.access_pattern(), self.right.access_pattern()) {
            (AccessPattern::Linear, AccessPattern::Linear) => AccessPattern::Linear,
            _ => AccessPattern::Cartesian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{CellSum, Dot, QuadraticForm};
    use proptest::prelude::*;
    use std::cell::Cell;
    use tessera_arrays::{IndirectArray, RaggedArray, StridedArray};
    use tessera_test_utils::strategies::arb_ragged_table;

    #[test]
    fn sums_over_ragged_cells() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let offsets = [1, 3, 4, 6];
        let cells = RaggedArray::from_offsets(&data, &offsets).unwrap();
        let mut sums = LazyMap::new(CellSum, cells);
        assert_eq!(sums.len(), 3);
        assert_eq!(sums.to_owned_cells(), vec![3.0, 3.0, 9.0]);
        assert_eq!(sums.access_pattern(), AccessPattern::Linear);
        assert_eq!(sums.cell_size(), None);
    }

    #[test]
    fn quadratic_form_over_gathered_cells() {
        let lid_to_gid = vec![vec![0usize, 1], vec![2, 0]];
        let values = [1.0, 2.0, 3.0];
        let cells = IndirectArray::from_slice(lid_to_gid, &values);
        let mut energy = LazyMap::new(QuadraticForm::identity(2), cells);
        assert_eq!(energy.access_pattern(), AccessPattern::Cartesian);
        assert_eq!(*energy.get(0), 5.0);
        assert_eq!(*energy.get(1), 10.0);
    }

    #[test]
    fn closure_kernel_over_strided_cells() {
        let data: Vec<i32> = (1..=7).collect();
        let cells = StridedArray::new(&data, 3).unwrap();
        let mut maxima = LazyMap::new(|c: &[i32]| c.iter().copied().max(), cells);
        assert_eq!(maxima.to_owned_cells(), vec![Some(3), Some(6), Some(7)]);
    }

    /// Counts how many caches it has handed out.
    struct CountingSum {
        caches: Cell<usize>,
    }

    impl<'a> Kernel<(&'a [f64],)> for CountingSum {
        type Cache = ();
        type Output = f64;

        fn make_cache(&self, _args: &(&'a [f64],)) {
            self.caches.set(self.caches.get() + 1);
        }

        fn apply(&self, _cache: &mut (), (x,): (&'a [f64],)) -> f64 {
            x.iter().sum()
        }
    }

    #[test]
    fn cache_is_created_once_on_first_access() {
        let data = [1.0, 1.0, 1.0];
        let cells = StridedArray::new(&data, 1).unwrap();
        let kernel = CountingSum {
            caches: Cell::new(0),
        };
        let mut mapped = LazyMap::new(kernel, cells);
        assert!(!mapped.is_cached());
        for i in 0..3 {
            assert_eq!(*mapped.get(i), 1.0);
        }
        assert!(mapped.is_cached());
        let (kernel, _) = mapped.into_parts();
        assert_eq!(kernel.caches.get(), 1);
    }

    #[test]
    fn zipped_dot_products() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 0.0, 1.0, 0.0];
        let left = StridedArray::new(&a, 2).unwrap();
        let right = StridedArray::new(&b, 2).unwrap();
        let mut dots = LazyMap2::new(Dot, left, right).unwrap();
        assert_eq!(dots.to_owned_cells(), vec![1.0, 3.0]);
        assert_eq!(dots.access_pattern(), AccessPattern::Linear);
    }

    #[test]
    fn zipped_access_pattern_is_cartesian_if_either_side_is() {
        let a = [1.0, 2.0];
        let left = StridedArray::new(&a, 2).unwrap();
        let right = IndirectArray::from_slice(vec![vec![1usize, 0]], &a);
        let mut dots = LazyMap2::new(Dot, left, right).unwrap();
        assert_eq!(dots.access_pattern(), AccessPattern::Cartesian);
        assert_eq!(*dots.get(0), 4.0);
    }

    #[test]
    fn zipped_length_mismatch_is_rejected() {
        let a = [1.0, 2.0, 3.0];
        let left = StridedArray::new(&a, 1).unwrap();
        let right = StridedArray::new(&a, 3).unwrap();
        let err = LazyMap2::new(Dot, left, right).unwrap_err();
        assert_eq!(err, ArrayError::LengthMismatch { left: 3, right: 1 });
    }

    proptest! {
        #[test]
        fn lazy_sums_match_nested_sums(table in arb_ragged_table(8, 5)) {
            let cells = RaggedArray::from_offsets(&table.data, &table.offsets).unwrap();
            let mut sums = LazyMap::new(
                |c: &[i32]| c.iter().map(|&v| i64::from(v)).sum::<i64>(),
                cells,
            );
            let expected: Vec<i64> = table
                .nested
                .iter()
                .map(|c| c.iter().map(|&v| i64::from(v)).sum())
                .collect();
            prop_assert_eq!(sums.to_owned_cells(), expected);
        }
    }
}
