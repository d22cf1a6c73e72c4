//! Scheme rules

use serde::{Deserialize, Serialize};

use core_kernel::{Claim, ClaimStatus, ClaimType};

/// One eligibility condition evaluated against a claim
///
/// Evaluation is a total function: conditions referencing optional fields
/// (the parcel location) are false when the field is absent, so one sparse
/// record never fails a whole evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Claim has exactly this status
    StatusIs(ClaimStatus),
    /// Claim is of exactly this type
    ClaimTypeIs(ClaimType),
    /// Claimed area strictly exceeds the threshold
    AreaAboveHectares(f64),
    /// Claim's state is one of these
    StateIn(Vec<String>),
    /// Claim carries surveyed coordinates
    HasLocation,
}

impl Condition {
    /// Returns true iff the condition holds for the claim
    pub fn holds(&self, claim: &Claim) -> bool {
        match self {
            Condition::StatusIs(status) => claim.status == *status,
            Condition::ClaimTypeIs(claim_type) => claim.claim_type == *claim_type,
            Condition::AreaAboveHectares(threshold) => claim.area_claimed_hectares > *threshold,
            Condition::StateIn(states) => states.iter().any(|s| s == &claim.state),
            Condition::HasLocation => claim.location.is_some(),
        }
    }
}

/// A government scheme with its eligibility rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub description: String,
    /// All conditions must hold for the claim to be eligible
    pub conditions: Vec<Condition>,
}

impl Scheme {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        conditions: Vec<Condition>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            conditions,
        }
    }

    /// Returns true iff the claim satisfies every condition
    pub fn is_eligible(&self, claim: &Claim) -> bool {
        self.conditions.iter().all(|c| c.holds(claim))
    }
}
