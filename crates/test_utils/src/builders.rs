//! Test Data Builders
//!
//! Provides a builder for constructing test claims with sensible defaults.
//! Tests specify only the fields they care about and take defaults for the
//! rest.

use chrono::NaiveDate;
use core_kernel::{Claim, ClaimId, ClaimStatus, ClaimType, GeoPoint};
use fake::faker::name::en::Name;
use fake::Fake;

/// Builder for constructing test claims
pub struct ClaimBuilder {
    claim_id: ClaimId,
    applicant_name: String,
    state: String,
    district: String,
    claim_type: ClaimType,
    status: ClaimStatus,
    area_claimed_hectares: f64,
    submission_date: NaiveDate,
    location: Option<GeoPoint>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: ClaimId::new("FRA-TEST-001").expect("valid default id"),
            applicant_name: Name().fake(),
            state: "Odisha".to_string(),
            district: "Mayurbhanj".to_string(),
            claim_type: ClaimType::IndividualForestRights,
            status: ClaimStatus::Pending,
            area_claimed_hectares: 2.5,
            submission_date: NaiveDate::from_ymd_opt(2023, 6, 15).expect("valid default date"),
            location: None,
        }
    }

    /// Sets the claim id from a registry code
    pub fn with_id(mut self, code: &str) -> Self {
        self.claim_id = ClaimId::new(code).expect("valid test claim id");
        self
    }

    /// Sets the applicant name
    pub fn with_applicant(mut self, name: impl Into<String>) -> Self {
        self.applicant_name = name.into();
        self
    }

    /// Sets the state
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the district
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = claim_type;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the claimed area in hectares
    pub fn with_area(mut self, hectares: f64) -> Self {
        self.area_claimed_hectares = hectares;
        self
    }

    /// Sets the submission date
    pub fn with_submission_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.submission_date =
            NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        self
    }

    /// Sets the parcel coordinates
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(GeoPoint { latitude, longitude });
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            claim_id: self.claim_id,
            applicant_name: self.applicant_name,
            state: self.state,
            district: self.district,
            claim_type: self.claim_type,
            status: self.status,
            area_claimed_hectares: self.area_claimed_hectares,
            submission_date: self.submission_date,
            location: self.location,
        }
    }
}
