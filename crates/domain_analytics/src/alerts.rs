//! System-wide alerts derived from the dataset

use serde::Serialize;

use core_kernel::{Claim, ClaimStatus};

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertLevel {
    Info,
    Warning,
}

/// A dataset-level condition worth surfacing to administrators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

/// Scans the dataset for conditions requiring attention
///
/// Currently one rule: any claims still Pending raise a warning carrying
/// the pending count.
pub fn system_alerts(claims: &[Claim]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let pending = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Pending)
        .count();
    if pending > 0 {
        alerts.push(Alert {
            level: AlertLevel::Warning,
            message: format!(
                "There are {pending} claim(s) with 'Pending' status requiring attention."
            ),
        });
    }

    alerts
}
