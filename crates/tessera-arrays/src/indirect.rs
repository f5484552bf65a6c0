//! Indirection containers: cells resolved through global value tables.
//!
//! Each container pairs a local-to-global table (a [`CellArray`] whose
//! cells are id sequences) with one or more global value tables, and
//! gathers the referenced values into a private [`CachedBuffer`]. The
//! buffer only grows past its high-water mark, so a traversal allocates a
//! handful of times at most.

use std::cmp::Ordering;

use tessera_core::{AccessPattern, CellArray, ScratchConfig};

use crate::cached::CachedBuffer;
use crate::direct::FlatArray;

/// Cells gathered from one global table by unsigned, 0-based ids.
///
/// ```
/// use tessera_arrays::IndirectArray;
/// use tessera_core::CellArray;
///
/// let lid_to_gid = vec![vec![0usize, 1], vec![1, 2]];
/// let values = [100, 200, 300];
/// let mut cells = IndirectArray::from_slice(lid_to_gid, &values);
/// assert_eq!(cells.get(0), &[100, 200]);
/// assert_eq!(cells.get(1), &[200, 300]);
/// ```
#[derive(Clone, Debug)]
pub struct IndirectArray<L, V, T> {
    lid_to_gid: L,
    gid_to_val: V,
    buffer: CachedBuffer<T>,
}

impl<L, V, T> IndirectArray<L, V, T>
where
    L: CellArray,
    L::Cell: AsRef<[usize]>,
    V: CellArray<Cell = T>,
    T: Clone + Default,
{
    /// Pair a local-to-global id table with a global value table.
    pub fn new(lid_to_gid: L, gid_to_val: V) -> Self {
        Self::with_config(lid_to_gid, gid_to_val, ScratchConfig::default())
    }

    /// Like [`new`](Self::new), with an explicit scratch configuration.
    pub fn with_config(lid_to_gid: L, gid_to_val: V, config: ScratchConfig) -> Self {
        tracing::debug!(
            cells = lid_to_gid.len(),
            globals = gid_to_val.len(),
            initial_capacity = config.initial_capacity,
            "indirect array"
        );
        Self {
            lid_to_gid,
            gid_to_val,
            buffer: CachedBuffer::with_config(config),
        }
    }
}

impl<'d, L, T> IndirectArray<L, FlatArray<'d, T>, T>
where
    L: CellArray,
    L::Cell: AsRef<[usize]>,
    T: Clone + Default,
{
    /// Build from a raw global value slice, wrapped in a [`FlatArray`].
    pub fn from_slice(lid_to_gid: L, values: &'d [T]) -> Self {
        Self::new(lid_to_gid, FlatArray::new(values))
    }
}

impl<L, V, T> IndirectArray<L, V, T> {
    /// Largest cell gathered so far.
    pub fn high_water(&self) -> usize {
        self.buffer.high_water()
    }

    /// The local-to-global id table.
    pub fn lid_to_gid(&self) -> &L {
        &self.lid_to_gid
    }

    /// The global value table.
    pub fn gid_to_val(&self) -> &V {
        &self.gid_to_val
    }
}

impl<L, V, T> CellArray for IndirectArray<L, V, T>
where
    L: CellArray,
    L::Cell: AsRef<[usize]>,
    V: CellArray<Cell = T>,
    T: Clone + Default,
{
    type Cell = [T];

    fn len(&self) -> usize {
        self.lid_to_gid.len()
    }

    fn get(&mut self, index: usize) -> &[T] {
        let gids = self.lid_to_gid.get(index).as_ref();
        let out = self.buffer.resize(gids.len());
        for (slot, &gid) in out.iter_mut().zip(gids) {
            slot.clone_from(self.gid_to_val.get(gid));
        }
        self.buffer.as_slice()
    }

    fn access_pattern(&self) -> AccessPattern {
        AccessPattern::Cartesian
    }

    fn cell_size(&self) -> Option<usize> {
        self.lid_to_gid.cell_size()
    }
}

/// Cells gathered by signed ids from a positive and a negative table.
///
/// Id `g > 0` reads `positive[g - 1]`; id `g < 0` reads
/// `negative[|g| - 1]`. Id `0` has no meaning and aborts the access.
///
/// ```
/// use tessera_arrays::PosNegIndirectArray;
/// use tessera_core::CellArray;
///
/// let lid_to_gid = vec![vec![1_i64, -2]];
/// let (positive, negative) = ([1, 2], [9, 8]);
/// let mut cells = PosNegIndirectArray::from_slices(lid_to_gid, &positive, &negative);
/// assert_eq!(cells.get(0), &[1, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct PosNegIndirectArray<L, P, N, T> {
    lid_to_gid: L,
    positive: P,
    negative: N,
    buffer: CachedBuffer<T>,
}

impl<L, P, N, T> PosNegIndirectArray<L, P, N, T>
where
    L: CellArray,
    L::Cell: AsRef<[i64]>,
    P: CellArray<Cell = T>,
    N: CellArray<Cell = T>,
    T: Clone + Default,
{
    /// Pair a signed id table with positive and negative value tables.
    pub fn new(lid_to_gid: L, positive: P, negative: N) -> Self {
        Self::with_config(lid_to_gid, positive, negative, ScratchConfig::default())
    }

    /// Like [`new`](Self::new), with an explicit scratch configuration.
    pub fn with_config(lid_to_gid: L, positive: P, negative: N, config: ScratchConfig) -> Self {
        tracing::debug!(
            cells = lid_to_gid.len(),
            positive = positive.len(),
            negative = negative.len(),
            "signed indirect array"
        );
        Self {
            lid_to_gid,
            positive,
            negative,
            buffer: CachedBuffer::with_config(config),
        }
    }
}

impl<'d, L, T> PosNegIndirectArray<L, FlatArray<'d, T>, FlatArray<'d, T>, T>
where
    L: CellArray,
    L::Cell: AsRef<[i64]>,
    T: Clone + Default,
{
    /// Build from raw value slices, each wrapped in a [`FlatArray`].
    pub fn from_slices(lid_to_gid: L, positive: &'d [T], negative: &'d [T]) -> Self {
        Self::new(lid_to_gid, FlatArray::new(positive), FlatArray::new(negative))
    }
}

impl<L, P, N, T> PosNegIndirectArray<L, P, N, T> {
    /// Largest cell gathered so far.
    pub fn high_water(&self) -> usize {
        self.buffer.high_water()
    }
}

impl<L, P, N, T> CellArray for PosNegIndirectArray<L, P, N, T>
where
    L: CellArray,
    L::Cell: AsRef<[i64]>,
    P: CellArray<Cell = T>,
    N: CellArray<Cell = T>,
    T: Clone + Default,
{
    type Cell = [T];

    fn len(&self) -> usize {
        self.lid_to_gid.len()
    }

    fn get(&mut self, index: usize) -> &[T] {
        let gids = self.lid_to_gid.get(index).as_ref();
        let out = self.buffer.resize(gids.len());
        for (position, (slot, &gid)) in out.iter_mut().zip(gids).enumerate() {
            let value = match gid.cmp(&0) {
                Ordering::Greater => self.positive.get((gid - 1) as usize),
                Ordering::Less => self.negative.get((gid.unsigned_abs() - 1) as usize),
                Ordering::Equal => panic!(
                    "global id 0 is not valid in a signed indirection table \
                     (cell {index}, position {position})"
                ),
            };
            slot.clone_from(value);
        }
        self.buffer.as_slice()
    }

    fn access_pattern(&self) -> AccessPattern {
        AccessPattern::Cartesian
    }

    fn cell_size(&self) -> Option<usize> {
        self.lid_to_gid.cell_size()
    }
}

/// Cells formed by concatenating intermediate cells.
///
/// Cell `i` is the concatenation, in order, of `mid_to_val[m]` for every
/// `m` in `cell_to_mid[i]`.
///
/// ```
/// use tessera_arrays::{ComposedIndirectArray, RaggedBuf};
/// use tessera_core::CellArray;
///
/// let mids = RaggedBuf::from_nested(vec![vec![1, 2], vec![3], vec![4, 5, 6]]);
/// let cell_to_mid = vec![vec![0usize, 2], vec![1]];
/// let mut cells = ComposedIndirectArray::new(cell_to_mid, mids.view());
/// assert_eq!(cells.get(0), &[1, 2, 4, 5, 6]);
/// assert_eq!(cells.get(1), &[3]);
/// ```
#[derive(Clone, Debug)]
pub struct ComposedIndirectArray<L, M, T> {
    cell_to_mid: L,
    mid_to_val: M,
    buffer: CachedBuffer<T>,
}

impl<L, M, T> ComposedIndirectArray<L, M, T>
where
    L: CellArray,
    L::Cell: AsRef<[usize]>,
    M: CellArray<Cell = [T]>,
    T: Clone + Default,
{
    /// Compose a cell-to-intermediate table with an intermediate container.
    pub fn new(cell_to_mid: L, mid_to_val: M) -> Self {
        Self::with_config(cell_to_mid, mid_to_val, ScratchConfig::default())
    }

    /// Like [`new`](Self::new), with an explicit scratch configuration.
    pub fn with_config(cell_to_mid: L, mid_to_val: M, config: ScratchConfig) -> Self {
        tracing::debug!(
            cells = cell_to_mid.len(),
            intermediates = mid_to_val.len(),
            "composed indirect array"
        );
        Self {
            cell_to_mid,
            mid_to_val,
            buffer: CachedBuffer::with_config(config),
        }
    }
}

impl<L, M, T> ComposedIndirectArray<L, M, T> {
    /// Largest cell gathered so far.
    pub fn high_water(&self) -> usize {
        self.buffer.high_water()
    }
}

impl<L, M, T> CellArray for ComposedIndirectArray<L, M, T>
where
    L: CellArray,
    L::Cell: AsRef<[usize]>,
    M: CellArray<Cell = [T]>,
    T: Clone + Default,
{
    type Cell = [T];

    fn len(&self) -> usize {
        self.cell_to_mid.len()
    }

    fn get(&mut self, index: usize) -> &[T] {
        let mids = self.cell_to_mid.get(index).as_ref();
        // Each intermediate cell is read once and copied before the next
        // read; growing the buffer keeps the segments already written.
        self.buffer.resize(0);
        let mut at = 0;
        for &m in mids {
            let segment = self.mid_to_val.get(m);
            let end = at + segment.len();
            self.buffer.resize(end)[at..].clone_from_slice(segment);
            at = end;
        }
        self.buffer.as_slice()
    }

    fn access_pattern(&self) -> AccessPattern {
        AccessPattern::Cartesian
    }
}
