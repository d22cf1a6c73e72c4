//! Claim Analytics Domain
//!
//! Aggregations computed over a claim slice: status/state/month counts for
//! dashboard cards and charts, priority scoring and ranking for the decision
//! support view, system alerts, and report snapshots for export adapters.
//!
//! Every operation here is total over well-formed claims: there is nothing
//! to reject, so nothing returns a `Result`.

pub mod summary;
pub mod priority;
pub mod alerts;
pub mod report;

pub use summary::{count_by_status, count_by_state, count_by_month};
pub use priority::{priority_score, rank_by_priority, priority_rules, PriorityRule, RuleCondition, RankedClaim};
pub use alerts::{system_alerts, Alert, AlertLevel};
pub use report::{build_report, ClaimReport, ReportFilter};
