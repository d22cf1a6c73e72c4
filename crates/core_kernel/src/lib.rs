//! Core Kernel - Foundational types for the forest rights claims system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - The immutable `Claim` record with closed status/type enumerations
//! - Strongly-typed claim identifiers
//! - Common error shapes

pub mod claim;
pub mod identifiers;
pub mod error;

pub use claim::{Claim, ClaimStatus, ClaimType, GeoPoint};
pub use identifiers::ClaimId;
pub use error::CoreError;
