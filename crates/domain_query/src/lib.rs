//! Claim Query Engine
//!
//! This crate derives ephemeral views over the immutable claim dataset:
//! conjunctive filtering, stable single-column sorting, and bounded
//! pagination. Every operation is a pure function over its inputs; the
//! same dataset and specs always produce the same [`View`].
//!
//! # Pipeline
//!
//! ```text
//! &[Claim] -> filter -> stable sort -> page slice -> View
//! ```

pub mod spec;
pub mod view;
pub mod engine;
pub mod error;

pub use spec::{FilterSpec, StatusFilter, TypeFilter, SortSpec, SortColumn, SortDirection, PageSpec};
pub use view::View;
pub use engine::query;
pub use error::QueryError;
