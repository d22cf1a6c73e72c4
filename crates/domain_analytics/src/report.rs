//! Report snapshots for export adapters
//!
//! A report is a frozen, filtered copy of the dataset plus its status
//! distribution. PDF/CSV rendering is the export adapter's concern; this
//! module only assembles the data.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{Claim, ClaimStatus};

use crate::summary::count_by_status;

/// Report filter: state and status, each either one value or everything
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReportFilter {
    /// Restrict to one state; `None` means all states
    pub state: Option<String>,
    /// Restrict to one status; `None` means all statuses
    pub status: Option<ClaimStatus>,
}

impl ReportFilter {
    fn matches(&self, claim: &Claim) -> bool {
        let state_match = self.state.as_deref().map_or(true, |s| claim.state == s);
        let status_match = self.status.map_or(true, |s| claim.status == s);
        state_match && status_match
    }
}

/// An assembled claims summary report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimReport {
    /// Date the report was generated, supplied by the caller
    pub generated_on: NaiveDate,
    /// The filter the report was built under
    pub filter: ReportFilter,
    /// Matching claims, in source order
    pub rows: Vec<Claim>,
    /// Status distribution of the rows, zero-filled
    pub status_counts: BTreeMap<ClaimStatus, usize>,
}

/// Builds a report over the claims matching the filter
pub fn build_report(claims: &[Claim], filter: &ReportFilter, generated_on: NaiveDate) -> ClaimReport {
    let rows: Vec<Claim> = claims
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();
    let status_counts = count_by_status(&rows);

    ClaimReport {
        generated_on,
        filter: filter.clone(),
        rows,
        status_counts,
    }
}
