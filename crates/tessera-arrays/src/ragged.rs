//! Ragged containers: offset-table and fixed-stride encodings.
//!
//! Both encodings store every cell contiguously in one backing buffer and
//! hand out cells through a single [`CachedSlice`] that is repositioned on
//! each access.

use std::ops::Range;

use tessera_core::traits::check_cell_index;
use tessera_core::{ArrayError, CellArray};

use crate::cached::CachedSlice;

/// Indexing base of an offset table, detected from its first entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetBase {
    /// First offset is `0`; cell `i` spans `data[o[i]..o[i+1]]`.
    Zero,
    /// First offset is `1`; cell `i` spans `data[o[i]-1..o[i+1]-1]`.
    One,
}

impl OffsetBase {
    /// Detect the base from the first table entry.
    pub fn detect(first: usize) -> Result<Self, ArrayError> {
        match first {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            _ => Err(ArrayError::InvalidOffsetBase { first }),
        }
    }

    /// Numeric value subtracted from each offset.
    #[inline]
    pub fn value(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// A ragged array described by an offset table.
///
/// `offsets` has one entry more than there are cells and must be
/// non-decreasing. Either 0-based (`[0, .., data.len()]`) or 1-based
/// (`[1, .., data.len() + 1]`) tables are accepted.
///
/// ```
/// use tessera_arrays::RaggedArray;
/// use tessera_core::CellArray;
///
/// let data = [10, 20, 30, 40, 50];
/// let offsets = [1, 3, 4, 6];
/// let mut cells = RaggedArray::from_offsets(&data, &offsets).unwrap();
/// assert_eq!(cells.get(0), &[10, 20]);
/// assert_eq!(cells.get(1), &[30]);
/// assert_eq!(cells.get(2), &[40, 50]);
/// assert_eq!(cells.cell_size(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct RaggedArray<'d, T> {
    offsets: &'d [usize],
    base: OffsetBase,
    max_cell: usize,
    view: CachedSlice<'d, T>,
}

impl<'d, T> RaggedArray<'d, T> {
    /// Build a ragged array, validating the offset table once.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::EmptyOffsets`] if `offsets` is empty
    /// - [`ArrayError::InvalidOffsetBase`] if it starts at neither 0 nor 1
    /// - [`ArrayError::NonMonotonicOffsets`] if any offset decreases
    /// - [`ArrayError::OffsetsLengthMismatch`] if the last offset does not
    ///   address exactly `data.len()` elements
    pub fn from_offsets(data: &'d [T], offsets: &'d [usize]) -> Result<Self, ArrayError> {
        let (Some(&first), Some(&last)) = (offsets.first(), offsets.last()) else {
            return Err(ArrayError::EmptyOffsets);
        };
        let base = OffsetBase::detect(first)?;

        let mut max_cell = 0;
        for (cell, pair) in offsets.windows(2).enumerate() {
            let (start, end) = (pair[0], pair[1]);
            if end < start {
                return Err(ArrayError::NonMonotonicOffsets { cell, start, end });
            }
            max_cell = max_cell.max(end - start);
        }

        // Monotonic and first == base, so last >= base.
        let addressed = last - base.value();
        if addressed != data.len() {
            return Err(ArrayError::OffsetsLengthMismatch {
                expected: addressed,
                actual: data.len(),
            });
        }

        tracing::debug!(
            cells = offsets.len() - 1,
            ?base,
            max_cell,
            "ragged array"
        );
        Ok(Self::from_validated(data, offsets, base, max_cell))
    }

    pub(crate) fn from_validated(
        data: &'d [T],
        offsets: &'d [usize],
        base: OffsetBase,
        max_cell: usize,
    ) -> Self {
        Self {
            offsets,
            base,
            max_cell,
            view: CachedSlice::new(data),
        }
    }

    /// The offset table this array was built from.
    pub fn offsets(&self) -> &'d [usize] {
        self.offsets
    }

    /// The backing data buffer.
    pub fn data(&self) -> &'d [T] {
        self.view.backing()
    }

    /// Detected indexing base of the offset table.
    pub fn base(&self) -> OffsetBase {
        self.base
    }

    /// 0-based range of cell `index` within [`data`](Self::data).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn cell_range(&self, index: usize) -> Range<usize> {
        check_cell_index(index, self.offsets.len() - 1);
        let b = self.base.value();
        self.offsets[index] - b..self.offsets[index + 1] - b
    }
}

impl<T> CellArray for RaggedArray<'_, T> {
    type Cell = [T];

    #[inline]
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    fn get(&mut self, index: usize) -> &[T] {
        let range = self.cell_range(index);
        self.view.reposition(range.start, range.end);
        self.view.as_slice()
    }

    fn cell_size(&self) -> Option<usize> {
        Some(self.max_cell)
    }
}

/// A ragged array whose cells all span `stride` elements.
///
/// When `data.len()` is not a multiple of `stride` the final cell is
/// short and holds the trailing elements.
///
/// ```
/// use tessera_arrays::StridedArray;
/// use tessera_core::CellArray;
///
/// let data: Vec<i32> = (1..=10).collect();
/// let mut cells = StridedArray::new(&data, 3).unwrap();
/// assert_eq!(cells.len(), 4);
/// assert_eq!(cells.get(0), &[1, 2, 3]);
/// assert_eq!(cells.get(3), &[10]);
/// ```
#[derive(Clone, Debug)]
pub struct StridedArray<'d, T> {
    stride: usize,
    len: usize,
    view: CachedSlice<'d, T>,
}

impl<'d, T> StridedArray<'d, T> {
    /// Build a strided array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ZeroStride`] if `stride == 0`.
    pub fn new(data: &'d [T], stride: usize) -> Result<Self, ArrayError> {
        if stride == 0 {
            return Err(ArrayError::ZeroStride);
        }
        let len = data.len().div_ceil(stride);
        tracing::debug!(
            cells = len,
            stride,
            short_tail = data.len() % stride,
            "strided array"
        );
        Ok(Self {
            stride,
            len,
            view: CachedSlice::new(data),
        })
    }

    /// Elements per full cell.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `true` if the final cell holds fewer than `stride` elements.
    pub fn has_short_tail(&self) -> bool {
        self.view.backing().len() % self.stride != 0
    }
}

impl<T> CellArray for StridedArray<'_, T> {
    type Cell = [T];

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&mut self, index: usize) -> &[T] {
        check_cell_index(index, self.len);
        let start = index * self.stride;
        let end = (start + self.stride).min(self.view.backing().len());
        self.view.reposition(start, end);
        self.view.as_slice()
    }

    fn cell_size(&self) -> Option<usize> {
        Some(self.stride)
    }
}

/// Owned ragged storage: a flat buffer plus a 0-based offset table.
///
/// Useful for building tables cell by cell; [`view`](Self::view) lends a
/// [`RaggedArray`] over the storage without re-validating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaggedBuf<T> {
    data: Vec<T>,
    offsets: Vec<usize>,
    max_cell: usize,
}

impl<T> RaggedBuf<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            offsets: vec![0],
            max_cell: 0,
        }
    }

    /// Build from an iterator of cells.
    pub fn from_nested<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
    {
        let mut buf = Self::new();
        for cell in cells {
            buf.push_cell(cell);
        }
        buf
    }

    /// Append one cell.
    pub fn push_cell<C: IntoIterator<Item = T>>(&mut self, cell: C) {
        let start = self.data.len();
        self.data.extend(cell);
        self.max_cell = self.max_cell.max(self.data.len() - start);
        self.offsets.push(self.data.len());
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns `true` if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flat data buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The 0-based offset table.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Lend a cached ragged view over this table.
    pub fn view(&self) -> RaggedArray<'_, T> {
        RaggedArray::from_validated(&self.data, &self.offsets, OffsetBase::Zero, self.max_cell)
    }
}

impl<T> Default for RaggedBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}
