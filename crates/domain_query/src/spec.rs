//! Query specifications
//!
//! Filter, sort, and page specs are plain values built by presentation
//! adapters. The `FromStr` impls accept the string values UI controls
//! submit and reject anything outside the closed enumerations before a
//! scan ever starts.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use core_kernel::{Claim, ClaimStatus, ClaimType};

use crate::error::QueryError;

/// Status dimension of a filter: everything, or one concrete status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ClaimStatus),
}

impl StatusFilter {
    fn matches(&self, claim: &Claim) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => claim.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("all") => Ok(StatusFilter::All),
            "Pending" => Ok(StatusFilter::Only(ClaimStatus::Pending)),
            "Approved" => Ok(StatusFilter::Only(ClaimStatus::Approved)),
            "Rejected" => Ok(StatusFilter::Only(ClaimStatus::Rejected)),
            other => Err(QueryError::UnknownStatus(other.to_string())),
        }
    }
}

/// Claim type dimension of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ClaimType),
}

impl TypeFilter {
    fn matches(&self, claim: &Claim) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(claim_type) => claim.claim_type == *claim_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("all") => Ok(TypeFilter::All),
            "Individual Forest Rights (IFR)" => {
                Ok(TypeFilter::Only(ClaimType::IndividualForestRights))
            }
            "Community Forest Rights (CFR)" => {
                Ok(TypeFilter::Only(ClaimType::CommunityForestRights))
            }
            other => Err(QueryError::UnknownClaimType(other.to_string())),
        }
    }
}

/// Conjunctive claim filter
///
/// A claim matches iff the search text matches (or is empty) AND the status
/// filter matches AND the type filter matches. The search is a
/// case-insensitive substring match against the applicant name or claim id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_text: String,
    pub status: StatusFilter,
    pub claim_type: TypeFilter,
}

impl FilterSpec {
    /// The permissive filter: matches every claim
    pub fn any() -> Self {
        Self::default()
    }

    /// Returns true iff the claim satisfies every filter dimension
    pub fn matches(&self, claim: &Claim) -> bool {
        self.search_matches(claim) && self.status.matches(claim) && self.claim_type.matches(claim)
    }

    fn search_matches(&self, claim: &Claim) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        claim.applicant_name.to_lowercase().contains(&needle)
            || claim.claim_id.as_str().to_lowercase().contains(&needle)
    }
}

/// Column a view can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    ClaimId,
    ApplicantName,
    State,
    District,
    ClaimType,
    Status,
    AreaClaimedHectares,
    SubmissionDate,
}

impl FromStr for SortColumn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Values match the data-column attributes of the table header
        match s {
            "claimId" => Ok(SortColumn::ClaimId),
            "applicantName" => Ok(SortColumn::ApplicantName),
            "state" => Ok(SortColumn::State),
            "district" => Ok(SortColumn::District),
            "claimType" => Ok(SortColumn::ClaimType),
            "status" => Ok(SortColumn::Status),
            "areaClaimedHectares" => Ok(SortColumn::AreaClaimedHectares),
            "submissionDate" => Ok(SortColumn::SubmissionDate),
            other => Err(QueryError::UnknownColumn(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(QueryError::UnknownDirection(other.to_string())),
        }
    }
}

/// Single-column sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: SortColumn) -> Self {
        Self { column, direction: SortDirection::Ascending }
    }

    pub fn descending(column: SortColumn) -> Self {
        Self { column, direction: SortDirection::Descending }
    }

    /// Compares two claims under this spec
    ///
    /// Equal keys compare as `Equal`, so a stable sort keeps their original
    /// relative order. Area uses `total_cmp`; stored areas are validated
    /// finite at the store boundary.
    pub fn compare(&self, a: &Claim, b: &Claim) -> Ordering {
        let ordering = match self.column {
            SortColumn::ClaimId => a.claim_id.cmp(&b.claim_id),
            SortColumn::ApplicantName => a.applicant_name.cmp(&b.applicant_name),
            SortColumn::State => a.state.cmp(&b.state),
            SortColumn::District => a.district.cmp(&b.district),
            SortColumn::ClaimType => a.claim_type.cmp(&b.claim_type),
            SortColumn::Status => a.status.cmp(&b.status),
            SortColumn::AreaClaimedHectares => {
                a.area_claimed_hectares.total_cmp(&b.area_claimed_hectares)
            }
            SortColumn::SubmissionDate => a.submission_date.cmp(&b.submission_date),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Page request: one-based page number, rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub number: usize,
    pub size: usize,
}

impl PageSpec {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// The first page at the given size
    pub fn first(size: usize) -> Self {
        Self { number: 1, size }
    }
}
