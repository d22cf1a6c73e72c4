//! Scheme Eligibility Advisor
//!
//! Matches government scheme eligibility rules against individual claims.
//! Rules are declarative condition lists rather than closures, so every
//! rule is serializable, inspectable, and testable on its own. Matching
//! is total: a condition over an absent optional field is simply false,
//! never an error.

pub mod scheme;
pub mod catalog;

pub use scheme::{Condition, Scheme};
pub use catalog::SchemeCatalog;
