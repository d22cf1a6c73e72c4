//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! forest rights claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test claims and sample documents
//! - `builders`: Builder pattern for test claim construction
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init()
        .ok();
});

/// Initializes the tracing subscriber once for a test binary
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
