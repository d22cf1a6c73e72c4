//! Summary counts for dashboard statistics

use std::collections::BTreeMap;

use core_kernel::{Claim, ClaimStatus};

/// Counts claims per status, zero-filled over the whole enumeration
///
/// Dashboard cards render all three categories unconditionally, so a status
/// absent from the data still gets an entry with count zero.
pub fn count_by_status(claims: &[Claim]) -> BTreeMap<ClaimStatus, usize> {
    let mut counts: BTreeMap<ClaimStatus, usize> =
        ClaimStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for claim in claims {
        *counts.entry(claim.status).or_default() += 1;
    }
    counts
}

/// Counts claims per state
///
/// The state domain is unbounded, so only states actually present get a key.
pub fn count_by_state(claims: &[Claim]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for claim in claims {
        *counts.entry(claim.state.clone()).or_insert(0) += 1;
    }
    counts
}

/// Counts submissions per (year, month) for trend charts
pub fn count_by_month(claims: &[Claim]) -> BTreeMap<(i32, u32), usize> {
    use chrono::Datelike;

    let mut counts = BTreeMap::new();
    for claim in claims {
        let key = (claim.submission_date.year(), claim.submission_date.month());
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
