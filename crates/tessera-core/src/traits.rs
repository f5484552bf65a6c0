//! The [`CellArray`] capability and its traversal hint.

use smallvec::{smallvec, SmallVec};

/// Logical dimensions of a cell array.
///
/// Flat containers report `[len]`; nested containers append the maximum
/// per-cell extent. Two inline slots cover every container in this
/// workspace without heap allocation.
pub type Shape = SmallVec<[usize; 2]>;

/// Preferred traversal for a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccessPattern {
    /// Cells are cheap to visit in order; linear traversal is preferred.
    #[default]
    Linear,
    /// Cells are resolved through a multi-level or indirected lookup, so
    /// downstream code should assume arbitrary access cost.
    Cartesian,
}

/// An indexable container of cells.
///
/// Any type satisfying this contract may be passed wherever a container is
/// expected; there is no base type. `Cell` is unsized-friendly so that a
/// container can hand out `&T`, `&[T]` or a view type.
///
/// # Aliasing
///
/// [`get`](Self::get) takes `&mut self` because cached containers reuse a
/// single scratch view and overwrite it on every call. The returned borrow
/// must end before the next `get`; copy the cell (e.g. `to_vec()`) if its
/// contents are needed afterwards.
///
/// # Examples
///
/// ```
/// use tessera_core::{AccessPattern, CellArray};
///
/// let mut values = vec![1.0_f64, 2.0, 3.0];
/// assert_eq!(CellArray::len(&values), 3);
/// assert_eq!(*CellArray::get(&mut values, 1), 2.0);
/// assert_eq!(values.access_pattern(), AccessPattern::Linear);
/// ```
pub trait CellArray {
    /// The type of one cell.
    type Cell: ?Sized;

    /// Number of cells. Stable for the lifetime of the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container has no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&mut self, index: usize) -> &Self::Cell;

    /// Traversal hint for downstream code. Default: [`AccessPattern::Linear`].
    fn access_pattern(&self) -> AccessPattern {
        AccessPattern::Linear
    }

    /// Fixed or maximum per-cell extent, if the container knows it.
    fn cell_size(&self) -> Option<usize> {
        None
    }

    /// Logical dimensions: `[len]`, plus `cell_size` when known.
    fn shape(&self) -> Shape {
        match self.cell_size() {
            Some(extent) => smallvec![self.len(), extent],
            None => smallvec![self.len()],
        }
    }

    /// Visit every cell in index order.
    fn for_each_cell<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &Self::Cell),
    {
        for i in 0..self.len() {
            f(i, self.get(i));
        }
    }

    /// Copy every cell into owned storage.
    ///
    /// Allocates once per cell; intended for tests and diagnostics, not
    /// for inner loops.
    fn to_owned_cells(&mut self) -> Vec<<Self::Cell as ToOwned>::Owned>
    where
        Self::Cell: ToOwned,
    {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            out.push(self.get(i).to_owned());
        }
        out
    }
}

/// Panic unless `index < len`.
#[track_caller]
#[inline]
pub fn check_cell_index(index: usize, len: usize) {
    if index >= len {
        panic!("cell index {index} out of bounds for array of {len} cells");
    }
}

impl<T> CellArray for Vec<T> {
    type Cell = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&mut self, index: usize) -> &T {
        check_cell_index(index, Vec::len(self));
        &self[index]
    }
}

impl<A: CellArray + ?Sized> CellArray for &mut A {
    type Cell = A::Cell;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&mut self, index: usize) -> &A::Cell {
        (**self).get(index)
    }

    fn access_pattern(&self) -> AccessPattern {
        (**self).access_pattern()
    }

    fn cell_size(&self) -> Option<usize> {
        (**self).cell_size()
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}
