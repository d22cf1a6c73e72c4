//! Comprehensive tests for domain_advisory

use core_kernel::{ClaimStatus, ClaimType};
use domain_advisory::{Condition, Scheme, SchemeCatalog};
use test_utils::{ClaimBuilder, ClaimFixtures};

// ============================================================================
// Condition Tests
// ============================================================================

mod condition_tests {
    use super::*;

    #[test]
    fn test_status_condition() {
        let claim = ClaimFixtures::approved_ifr();
        assert!(Condition::StatusIs(ClaimStatus::Approved).holds(&claim));
        assert!(!Condition::StatusIs(ClaimStatus::Pending).holds(&claim));
    }

    #[test]
    fn test_area_condition_is_strict() {
        let claim = ClaimBuilder::new().with_area(10.0).build();
        assert!(!Condition::AreaAboveHectares(10.0).holds(&claim));
        assert!(Condition::AreaAboveHectares(9.99).holds(&claim));
    }

    #[test]
    fn test_state_in_condition() {
        let claim = ClaimBuilder::new().with_state("Odisha").build();
        let condition = Condition::StateIn(vec!["Odisha".to_string(), "Jharkhand".to_string()]);
        assert!(condition.holds(&claim));

        let elsewhere = ClaimBuilder::new().with_state("Kerala").build();
        assert!(!condition.holds(&elsewhere));
    }

    #[test]
    fn test_absent_location_is_false_not_an_error() {
        let unsurveyed = ClaimBuilder::new().build();
        assert!(!Condition::HasLocation.holds(&unsurveyed));

        let surveyed = ClaimBuilder::new().with_location(21.9, 86.7).build();
        assert!(Condition::HasLocation.holds(&surveyed));
    }

    #[test]
    fn test_conditions_serialize_for_inspection() {
        let condition = Condition::AreaAboveHectares(10.0);
        let json = serde_json::to_string(&condition).unwrap();
        let back: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condition);
    }
}

// ============================================================================
// Catalog Tests
// ============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = SchemeCatalog::default();
        let names: Vec<&str> = catalog.schemes().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Pradhan Mantri Kisan Samman Nidhi",
                "National Bamboo Mission",
                "Jal Jeevan Mission",
                "Urgent Review Protocol",
            ]
        );
    }

    #[test]
    fn test_approved_individual_claim_matches_income_support() {
        let catalog = SchemeCatalog::default();
        let claim = ClaimFixtures::approved_ifr();

        let matches = catalog.match_schemes(&claim);
        let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
        // Odisha approved claim also qualifies for drinking water coverage.
        assert_eq!(
            names,
            vec!["Pradhan Mantri Kisan Samman Nidhi", "Jal Jeevan Mission"]
        );
    }

    #[test]
    fn test_pending_claim_matches_urgent_review_only() {
        let catalog = SchemeCatalog::default();
        let claim = ClaimFixtures::pending_large_cfr();

        let matches = catalog.match_schemes(&claim);
        let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Urgent Review Protocol"]);
    }

    #[test]
    fn test_approved_large_community_claim_matches_bamboo_mission() {
        let catalog = SchemeCatalog::default();
        let claim = ClaimFixtures::approved_large_cfr();

        let matches = catalog.match_schemes(&claim);
        let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["National Bamboo Mission", "Jal Jeevan Mission"]);
    }

    #[test]
    fn test_rejected_claim_matches_nothing() {
        let catalog = SchemeCatalog::default();
        let claim = ClaimBuilder::new()
            .with_status(ClaimStatus::Rejected)
            .with_state("Kerala")
            .build();

        assert!(catalog.match_schemes(&claim).is_empty());
    }

    #[test]
    fn test_custom_catalog_preserves_rule_order() {
        let catalog = SchemeCatalog::new(vec![
            Scheme::new("Second", "b", vec![Condition::StatusIs(ClaimStatus::Pending)]),
            Scheme::new("First", "a", vec![Condition::StatusIs(ClaimStatus::Pending)]),
        ]);
        let claim = ClaimBuilder::new().with_status(ClaimStatus::Pending).build();

        let names: Vec<&str> = catalog
            .match_schemes(&claim)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        // Catalog order, not alphabetical and not scored.
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_urgent_review_is_not_exclusive() {
        // A pending claim that also satisfies a custom pending-state rule
        // matches both; the protocol does not suppress other schemes.
        let catalog = SchemeCatalog::new(vec![
            Scheme::new(
                "Pending Community Outreach",
                "outreach",
                vec![
                    Condition::StatusIs(ClaimStatus::Pending),
                    Condition::ClaimTypeIs(ClaimType::CommunityForestRights),
                ],
            ),
            Scheme::new(
                "Urgent Review Protocol",
                "urgent",
                vec![Condition::StatusIs(ClaimStatus::Pending)],
            ),
        ]);
        let claim = ClaimFixtures::pending_large_cfr();

        assert_eq!(catalog.match_schemes(&claim).len(), 2);
    }
}
