//! Cell arrays for Tessera.
//!
//! Every container here implements [`CellArray`](tessera_core::CellArray)
//! and hands out cells without allocating per access. Containers borrow
//! their backing tables and keep one reusable scratch view each:
//!
//! ```text
//! FlatArray / NestedArray      pass-through, no scratch
//! RaggedArray / StridedArray   CachedSlice  (window over the backing data)
//! IndirectArray                CachedBuffer (gathered global values)
//! PosNegIndirectArray          CachedBuffer (signed ids, two value tables)
//! ComposedIndirectArray        CachedBuffer (flattened intermediate cells)
//! ```
//!
//! # Aliasing
//!
//! A cell returned by a cached container is overwritten by the next
//! `get` on the same instance. `get` takes `&mut self`, so the borrow
//! checker rejects holding a cell across the next access. For
//! multi-threaded traversals build one container per thread over the same
//! shared tables.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cached;
pub mod direct;
pub mod indirect;
pub mod ragged;

#[cfg(test)]
pub(crate) mod compliance;

pub use cached::{CachedBuffer, CachedSlice};
pub use direct::{FlatArray, NestedArray};
pub use indirect::{ComposedIndirectArray, IndirectArray, PosNegIndirectArray};
pub use ragged::{OffsetBase, RaggedArray, RaggedBuf, StridedArray};
