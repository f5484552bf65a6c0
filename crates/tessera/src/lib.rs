//! Tessera: allocation-avoiding cell arrays and a cached kernel protocol.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessera sub-crates. For most users, adding `tessera` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // Element connectivity, 1-based, and nodal values.
//! let connectivity: [usize; 6] = [1, 2, 2, 3, 3, 4];
//! let offsets = [1, 3, 5, 7];
//! let nodal = [0.0, 1.0, 4.0, 9.0];
//!
//! // 0-based node ids per element, then a gathering view over nodal values.
//! let mut ids: Vec<Vec<usize>> = Vec::new();
//! let mut elements = RaggedArray::from_offsets(&connectivity, &offsets).unwrap();
//! for e in 0..elements.len() {
//!     ids.push(elements.get(e).iter().map(|n| n - 1).collect());
//! }
//! let cells = IndirectArray::from_slice(ids, &nodal);
//!
//! // Evaluate a kernel lazily over the gathered cells.
//! let mut sums = LazyMap::new(CellSum, cells);
//! assert_eq!(sums.to_owned_cells(), vec![1.0, 5.0, 13.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | `CellArray` trait, access patterns, errors, scratch configuration |
//! | [`arrays`] | `tessera-arrays` | Cached views, direct, ragged and indirection arrays |
//! | [`kernel`] | `tessera-kernel` | Kernel trait, batches, conformance harness, lazy maps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits, errors, and configuration (`tessera-core`).
///
/// Contains the [`types::CellArray`] capability, [`types::AccessPattern`],
/// [`types::ArrayError`] and [`types::ScratchConfig`].
pub use tessera_core as types;

/// Cell-array containers (`tessera-arrays`).
///
/// Provides [`arrays::RaggedArray`], [`arrays::StridedArray`],
/// [`arrays::IndirectArray`], [`arrays::PosNegIndirectArray`],
/// [`arrays::ComposedIndirectArray`] and the cached views they are built on.
pub use tessera_arrays as arrays;

/// Kernel protocol (`tessera-kernel`).
///
/// The [`kernel::Kernel`] trait is the main extension point for
/// user-defined cell operations. Validate new kernels with
/// [`kernel::test_kernel`].
pub use tessera_kernel as kernel;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
///
/// This imports the cell-array trait, every container, the kernel traits
/// and the reference kernels.
pub mod prelude {
    // Core types and traits
    pub use tessera_core::{AccessPattern, ArrayError, CellArray, GrowthPolicy, ScratchConfig};

    // Containers
    pub use tessera_arrays::{
        CachedBuffer, CachedSlice, ComposedIndirectArray, FlatArray, IndirectArray, NestedArray,
        PosNegIndirectArray, RaggedArray, RaggedBuf, StridedArray,
    };

    // Kernels
    pub use tessera_kernel::{
        AffineMap, CellMean, CellSum, Dot, Kernel, KernelBatch, LazyMap, LazyMap2,
        QuadraticForm, ReturnType,
    };
}
