//! Claim record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifiers::ClaimId;

/// Processing status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting review
    Pending,
    /// Granted
    Approved,
    /// Refused
    Rejected,
}

impl ClaimStatus {
    /// All statuses in the enumeration, in display order
    pub const ALL: [ClaimStatus; 3] = [
        ClaimStatus::Pending,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of forest rights claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClaimType {
    /// Rights claimed by an individual household
    #[serde(rename = "Individual Forest Rights (IFR)")]
    IndividualForestRights,
    /// Rights claimed by a village community
    #[serde(rename = "Community Forest Rights (CFR)")]
    CommunityForestRights,
}

impl ClaimType {
    /// All claim types in the enumeration
    pub const ALL: [ClaimType; 2] = [
        ClaimType::IndividualForestRights,
        ClaimType::CommunityForestRights,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::IndividualForestRights => "Individual Forest Rights (IFR)",
            ClaimType::CommunityForestRights => "Community Forest Rights (CFR)",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinates of the claimed parcel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single land-rights record under evaluation
///
/// Claims are immutable once loaded; the dataset store validates them at
/// its boundary and no module mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique registry code
    pub claim_id: ClaimId,
    /// Name of the applicant (individual or gram sabha)
    pub applicant_name: String,
    /// State the parcel lies in
    pub state: String,
    /// District within the state
    pub district: String,
    /// Category of rights claimed
    pub claim_type: ClaimType,
    /// Processing status
    pub status: ClaimStatus,
    /// Claimed area in hectares, never negative
    pub area_claimed_hectares: f64,
    /// Date the claim was submitted
    pub submission_date: NaiveDate,
    /// Parcel coordinates, when surveyed
    #[serde(default)]
    pub location: Option<GeoPoint>,
}
