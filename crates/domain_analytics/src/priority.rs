//! Priority scoring and ranking
//!
//! The scoring rules are a fixed additive table, kept as data rather than
//! code so each rule is inspectable and testable in isolation. A claim's
//! score is the sum of the points of every rule whose condition holds.

use serde::Serialize;
use tracing::debug;

use core_kernel::{Claim, ClaimStatus, ClaimType};

/// Condition a priority rule tests against a claim
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RuleCondition {
    StatusIs(ClaimStatus),
    ClaimTypeIs(ClaimType),
    AreaAboveHectares(f64),
}

impl RuleCondition {
    fn holds(&self, claim: &Claim) -> bool {
        match self {
            RuleCondition::StatusIs(status) => claim.status == *status,
            RuleCondition::ClaimTypeIs(claim_type) => claim.claim_type == *claim_type,
            RuleCondition::AreaAboveHectares(threshold) => {
                claim.area_claimed_hectares > *threshold
            }
        }
    }
}

/// One additive scoring rule
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriorityRule {
    pub label: &'static str,
    pub points: u32,
    pub condition: RuleCondition,
}

static RULES: [PriorityRule; 4] = [
    PriorityRule {
        label: "Pending status",
        points: 50,
        condition: RuleCondition::StatusIs(ClaimStatus::Pending),
    },
    PriorityRule {
        label: "Rejected status",
        points: 25,
        condition: RuleCondition::StatusIs(ClaimStatus::Rejected),
    },
    PriorityRule {
        label: "Community claim",
        points: 15,
        condition: RuleCondition::ClaimTypeIs(ClaimType::CommunityForestRights),
    },
    PriorityRule {
        label: "Large area",
        points: 10,
        condition: RuleCondition::AreaAboveHectares(100.0),
    },
];

/// The fixed scoring rule table
pub fn priority_rules() -> &'static [PriorityRule] {
    &RULES
}

/// Computes a claim's priority score
pub fn priority_score(claim: &Claim) -> u32 {
    RULES
        .iter()
        .filter(|rule| rule.condition.holds(claim))
        .map(|rule| rule.points)
        .sum()
}

/// A claim paired with its priority score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedClaim {
    pub claim: Claim,
    pub score: u32,
}

/// Ranks claims needing attention, highest score first
///
/// Claims scoring zero are excluded. The sort is stable, so claims with
/// equal scores keep their source order, and re-invoking on unchanged input
/// yields the same ranking.
pub fn rank_by_priority(claims: &[Claim]) -> Vec<RankedClaim> {
    let mut ranked: Vec<RankedClaim> = claims
        .iter()
        .filter_map(|claim| {
            let score = priority_score(claim);
            (score > 0).then(|| RankedClaim {
                claim: claim.clone(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(high_priority = ranked.len(), total = claims.len(), "ranked claims by priority");
    ranked
}
