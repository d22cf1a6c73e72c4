//! Dataset Store
//!
//! This crate owns the single I/O boundary of the system: loading the static
//! claim dataset from a JSON document and validating every record before any
//! domain module sees it. Once loaded the store is a read-only value; there
//! are no mutation methods and no caching layer.

pub mod store;
pub mod config;
pub mod error;

pub use store::DatasetStore;
pub use config::StoreConfig;
pub use error::LoadError;
