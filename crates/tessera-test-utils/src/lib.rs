//! Test utilities for Tessera development.
//!
//! Provides the reference tables used across crate tests
//! ([`fixtures`]), proptest strategies producing well-formed ragged and
//! indirection tables ([`strategies`]), and a tracing subscriber for tests
//! that want to see container logging ([`init_test_logging`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honours `RUST_LOG`; defaults to `debug`. Safe to call from every test,
/// later calls are no-ops.
pub fn init_test_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}
