//! Pre-built Test Fixtures
//!
//! Ready-to-use claims covering every status/type combination the suite
//! needs, plus the scenario claims used across crates. Fixtures are
//! deterministic so assertions can name exact ids and scores.

use core_kernel::{Claim, ClaimStatus, ClaimType};

use crate::builders::ClaimBuilder;

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Approved individual claim, small area (scores 0 priority)
    pub fn approved_ifr() -> Claim {
        ClaimBuilder::new()
            .with_id("FRA-2023-B")
            .with_applicant("Ramesh Kumar")
            .with_status(ClaimStatus::Approved)
            .with_claim_type(ClaimType::IndividualForestRights)
            .with_area(5.0)
            .with_submission_date(2023, 3, 15)
            .build()
    }

    /// Pending community claim over 100 hectares (scores 50 + 15 + 10 = 75)
    pub fn pending_large_cfr() -> Claim {
        ClaimBuilder::new()
            .with_id("FRA-2023-A")
            .with_applicant("Gram Sabha Salia")
            .with_state("Odisha")
            .with_status(ClaimStatus::Pending)
            .with_claim_type(ClaimType::CommunityForestRights)
            .with_area(150.0)
            .with_submission_date(2023, 4, 2)
            .build()
    }

    /// Rejected individual claim (scores 25)
    pub fn rejected_ifr() -> Claim {
        ClaimBuilder::new()
            .with_id("FRA-2023-C")
            .with_applicant("Sunita Devi")
            .with_state("Jharkhand")
            .with_district("Ranchi")
            .with_status(ClaimStatus::Rejected)
            .with_claim_type(ClaimType::IndividualForestRights)
            .with_area(1.2)
            .with_submission_date(2023, 5, 20)
            .build()
    }

    /// Approved community claim over 10 hectares (bamboo mission eligible)
    pub fn approved_large_cfr() -> Claim {
        ClaimBuilder::new()
            .with_id("FRA-2023-D")
            .with_applicant("Gram Sabha Bandhgaon")
            .with_state("Jharkhand")
            .with_district("West Singhbhum")
            .with_status(ClaimStatus::Approved)
            .with_claim_type(ClaimType::CommunityForestRights)
            .with_area(56.4)
            .with_submission_date(2023, 6, 11)
            .with_location(22.5726, 85.8166)
            .build()
    }

    /// A mixed set in a fixed order, one claim per fixture above
    pub fn mixed_set() -> Vec<Claim> {
        vec![
            Self::approved_ifr(),
            Self::pending_large_cfr(),
            Self::rejected_ifr(),
            Self::approved_large_cfr(),
        ]
    }

    /// The mixed set wrapped in the source document shape the store loads
    pub fn sample_document() -> String {
        let claims = serde_json::to_value(Self::mixed_set()).expect("fixtures serialize");
        serde_json::json!({ "claims": claims }).to_string()
    }
}
