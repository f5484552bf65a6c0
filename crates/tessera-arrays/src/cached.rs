//! Reusable scratch views: [`CachedSlice`] and [`CachedBuffer`].
//!
//! Both types are owned by exactly one container and overwritten on each
//! cell access. Neither allocates on the access path, except when a
//! [`CachedBuffer`] must grow past its high-water mark.

use std::ops::{Deref, Range};

use tessera_core::{GrowthPolicy, ScratchConfig};

/// A movable window over a borrowed backing buffer.
///
/// Ragged containers keep one `CachedSlice` and reposition it for every
/// cell. Repositioning is O(1) and invalidates the previous window; the
/// backing data itself is never copied.
///
/// ```
/// use tessera_arrays::CachedSlice;
///
/// let data = [10, 20, 30, 40];
/// let mut view = CachedSlice::new(&data);
/// view.reposition(1, 3);
/// assert_eq!(view.as_slice(), &[20, 30]);
/// assert_eq!(*view.get(1), 30);
/// ```
#[derive(Clone, Debug)]
pub struct CachedSlice<'d, T> {
    data: &'d [T],
    start: usize,
    end: usize,
}

impl<'d, T> CachedSlice<'d, T> {
    /// Create a view over `data` with an empty window at offset 0.
    pub fn new(data: &'d [T]) -> Self {
        Self {
            data,
            start: 0,
            end: 0,
        }
    }

    /// Move the window to `start..end` (half-open).
    ///
    /// # Panics
    ///
    /// Panics if `end < start` or `end` is past the backing buffer.
    #[inline]
    pub fn reposition(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.data.len(),
            "window {start}..{end} outside backing buffer of {} elements",
            self.data.len()
        );
        self.start = start;
        self.end = end;
    }

    /// Element `offset` of the current window.
    #[inline]
    pub fn get(&self, offset: usize) -> &T {
        assert!(
            offset < self.len(),
            "offset {offset} outside window of {} elements",
            self.len()
        );
        &self.data[self.start + offset]
    }

    /// Number of elements in the current window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the current window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The current window as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.start..self.end]
    }

    /// Bounds of the current window within the backing buffer.
    pub fn window(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The whole backing buffer.
    pub fn backing(&self) -> &'d [T] {
        self.data
    }
}

impl<T> Deref for CachedSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for CachedSlice<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

/// Growable scratch storage reused across cell accesses.
///
/// Indirection containers gather values into a `CachedBuffer`. The
/// backing `Vec` only grows, following the configured [`GrowthPolicy`];
/// requests at or below the high-water mark never allocate. Slots beyond
/// the current logical length keep stale values from earlier cells.
#[derive(Clone, Debug)]
pub struct CachedBuffer<T> {
    data: Vec<T>,
    len: usize,
    high_water: usize,
    grow_count: usize,
    growth: GrowthPolicy,
}

impl<T: Clone + Default> CachedBuffer<T> {
    /// Create an empty buffer with the default [`ScratchConfig`].
    pub fn new() -> Self {
        Self::with_config(ScratchConfig::default())
    }

    /// Create a buffer pre-filled to `config.initial_capacity` slots.
    pub fn with_config(config: ScratchConfig) -> Self {
        Self {
            data: vec![T::default(); config.initial_capacity],
            len: 0,
            high_water: 0,
            grow_count: 0,
            growth: config.growth,
        }
    }

    /// Set the logical length to `len` and return the writable window.
    ///
    /// Slots are never moved or cleared: values written below the new
    /// length before the call are still there. Slots not written since the
    /// last traversal hold stale or default values.
    pub fn resize(&mut self, len: usize) -> &mut [T] {
        if len > self.data.len() {
            let capacity = self.growth.next_capacity(self.data.len(), len);
            tracing::trace!(
                from = self.data.len(),
                to = capacity,
                requested = len,
                "growing cached buffer"
            );
            self.data.resize(capacity, T::default());
            self.grow_count += 1;
        }
        self.len = len;
        self.high_water = self.high_water.max(len);
        &mut self.data[..len]
    }
}

impl<T: Clone + Default> Default for CachedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CachedBuffer<T> {
    /// The current logical contents.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// The current logical contents, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Current logical length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots available without growing.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Largest logical length requested so far.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Number of times the backing storage has grown.
    pub fn grow_count(&self) -> usize {
        self.grow_count
    }

    /// Memory held by the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

impl<T> Deref for CachedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for CachedBuffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
