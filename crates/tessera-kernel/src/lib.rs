//! Kernel protocol for Tessera.
//!
//! A kernel is an operation over a fixed argument tuple that may keep
//! scratch state in a cache created once and reused across many
//! applications:
//!
//! ```text
//! Uncached --make_cache--> Cached --apply--> Cached --apply--> ...
//! ```
//!
//! Any `Fn` of up to four arguments is a kernel with an empty cache.
//! Tuples and slices of kernels are applied together through
//! [`KernelBatch`], and [`LazyMap`] turns a kernel plus a cell array into
//! another cell array. New kernels are validated with [`test_kernel`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod conformance;
pub mod kernel;
pub mod kernels;
pub mod lazy;
pub mod return_type;

pub use batch::KernelBatch;
pub use conformance::{test_kernel, test_kernel_eq};
pub use kernel::{apply, apply_once, infer_return_type, make_cache, Kernel};
pub use kernels::{AffineMap, CellMean, CellSum, Dot, QuadraticForm};
pub use lazy::{LazyMap, LazyMap2};
pub use return_type::ReturnType;
