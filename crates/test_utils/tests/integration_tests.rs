//! Integration Tests for the Forest Rights Claims Core
//!
//! These tests verify cross-domain workflows that involve multiple crates
//! working together: load -> query -> rank -> advise, the same pipeline the
//! presentation adapters drive.

use core_kernel::ClaimStatus;
use domain_analytics::{count_by_status, rank_by_priority, system_alerts};
use domain_advisory::SchemeCatalog;
use domain_query::{query, FilterSpec, PageSpec, SortColumn, SortSpec, StatusFilter};
use infra_store::DatasetStore;
use test_utils::{init_tracing, ClaimFixtures};

mod dashboard_workflow {
    use super::*;

    /// Loads the dataset and derives the statistics the dashboard renders
    #[test]
    fn test_load_and_summarize() {
        init_tracing();
        let store = DatasetStore::from_json(&ClaimFixtures::sample_document()).unwrap();

        let counts = count_by_status(store.claims());
        assert_eq!(counts.values().sum::<usize>(), store.len());
        assert_eq!(counts[&ClaimStatus::Approved], 2);

        let alerts = system_alerts(store.claims());
        assert_eq!(alerts.len(), 1);
    }
}

mod review_workflow {
    use super::*;

    /// Walks the reviewer path: filter the table, rank the backlog, then
    /// pull scheme advice for the top-priority claim.
    #[test]
    fn test_filter_rank_and_advise() {
        init_tracing();
        let store = DatasetStore::from_json(&ClaimFixtures::sample_document()).unwrap();

        // Reviewer filters the table down to pending claims.
        let filter = FilterSpec {
            status: StatusFilter::Only(ClaimStatus::Pending),
            ..FilterSpec::default()
        };
        let sort = SortSpec::descending(SortColumn::AreaClaimedHectares);
        let view = query(store.claims(), &filter, Some(&sort), &PageSpec::first(5)).unwrap();
        assert_eq!(view.total_matched, 1);

        // The backlog ranking surfaces the same claim first.
        let ranked = rank_by_priority(store.claims());
        assert_eq!(ranked[0].claim.claim_id, view.claims[0].claim_id);
        assert_eq!(ranked[0].score, 75);

        // Scheme advice for a pending claim is the urgent review flag only.
        let catalog = SchemeCatalog::default();
        let matches = catalog.match_schemes(&ranked[0].claim);
        let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Urgent Review Protocol"]);
    }

    /// The store stays untouched by a rejected query
    #[test]
    fn test_failed_query_leaves_store_usable() {
        let store = DatasetStore::from_json(&ClaimFixtures::sample_document()).unwrap();
        let before = store.claims().to_vec();

        let result = query(store.claims(), &FilterSpec::any(), None, &PageSpec::new(99, 5));
        assert!(result.is_err());
        assert_eq!(store.claims(), before.as_slice());

        // A well-formed follow-up query still succeeds.
        let view = query(store.claims(), &FilterSpec::any(), None, &PageSpec::first(5)).unwrap();
        assert_eq!(view.total_matched, store.len());
    }
}
