//! Core types and traits for the Tessera cell-array substrate.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`CellArray`] capability every container satisfies, the
//! [`AccessPattern`] traversal hint, construction errors, and the scratch
//! growth configuration shared by cached containers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod traits;

pub use config::{GrowthPolicy, ScratchConfig};
pub use error::ArrayError;
pub use traits::{AccessPattern, CellArray, Shape};
