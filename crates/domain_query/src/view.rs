//! Derived query views

use serde::Serialize;

use core_kernel::Claim;

/// One page of a filtered, sorted claim sequence
///
/// Views are ephemeral: recomputed on every query, never mutated in place,
/// and owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    /// The claims on this page, at most `page size` of them
    pub claims: Vec<Claim>,
    /// Total claims matched by the filter, across all pages
    pub total_matched: usize,
    /// Total page count; at least 1 even when nothing matched
    pub total_pages: usize,
    /// One-based number of this page
    pub page_number: usize,
}
