//! Scheme catalog

use once_cell::sync::Lazy;
use tracing::debug;

use core_kernel::{Claim, ClaimStatus, ClaimType};

use crate::scheme::{Condition, Scheme};

static DEFAULT_SCHEMES: Lazy<Vec<Scheme>> = Lazy::new(|| {
    vec![
        Scheme::new(
            "Pradhan Mantri Kisan Samman Nidhi",
            "Provides income support to all landholding farmer families.",
            vec![
                Condition::StatusIs(ClaimStatus::Approved),
                Condition::ClaimTypeIs(ClaimType::IndividualForestRights),
            ],
        ),
        Scheme::new(
            "National Bamboo Mission",
            "Promotes the growth of the bamboo sector in forest and non-forest areas.",
            vec![
                Condition::StatusIs(ClaimStatus::Approved),
                Condition::ClaimTypeIs(ClaimType::CommunityForestRights),
                Condition::AreaAboveHectares(10.0),
            ],
        ),
        Scheme::new(
            "Jal Jeevan Mission",
            "Aims to provide safe and adequate drinking water through individual \
             household tap connections.",
            vec![
                Condition::StatusIs(ClaimStatus::Approved),
                Condition::StateIn(vec!["Odisha".to_string(), "Jharkhand".to_string()]),
            ],
        ),
        Scheme::new(
            "Urgent Review Protocol",
            "This claim is flagged for urgent review due to its pending status, \
             indicating a potential administrative delay.",
            vec![Condition::StatusIs(ClaimStatus::Pending)],
        ),
    ]
});

/// A fixed, ordered list of schemes to advise against
///
/// Matches are returned in catalog order, not ranked; the rule list order is
/// part of the advisor's contract. The Urgent Review Protocol entry matches
/// every Pending claim and does not exclude other matches.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self { schemes: DEFAULT_SCHEMES.clone() }
    }
}

impl SchemeCatalog {
    /// Builds a catalog from an explicit rule list
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    /// All schemes, in evaluation order
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Returns every scheme the claim is eligible for, in catalog order
    pub fn match_schemes(&self, claim: &Claim) -> Vec<&Scheme> {
        let matches: Vec<&Scheme> = self
            .schemes
            .iter()
            .filter(|scheme| scheme.is_eligible(claim))
            .collect();
        debug!(
            claim_id = %claim.claim_id,
            matched = matches.len(),
            "matched schemes for claim"
        );
        matches
    }
}
