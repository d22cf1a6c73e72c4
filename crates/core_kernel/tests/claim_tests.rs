//! Tests for the claim record and its enumerations

use chrono::NaiveDate;
use core_kernel::{Claim, ClaimStatus, ClaimType};

#[test]
fn test_claim_deserializes_source_document_fields() {
    let json = r#"{
        "claimId": "FRA-2023-001",
        "applicantName": "Ramesh Kumar",
        "state": "Odisha",
        "district": "Mayurbhanj",
        "claimType": "Individual Forest Rights (IFR)",
        "status": "Approved",
        "areaClaimedHectares": 2.5,
        "submissionDate": "2023-03-15",
        "location": { "latitude": 21.93, "longitude": 86.73 }
    }"#;

    let claim: Claim = serde_json::from_str(json).unwrap();
    assert_eq!(claim.claim_id.as_str(), "FRA-2023-001");
    assert_eq!(claim.claim_type, ClaimType::IndividualForestRights);
    assert_eq!(claim.status, ClaimStatus::Approved);
    assert_eq!(claim.submission_date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    assert!(claim.location.is_some());
}

#[test]
fn test_claim_tolerates_missing_location() {
    let json = r#"{
        "claimId": "FRA-2023-002",
        "applicantName": "Gram Sabha Salia",
        "state": "Jharkhand",
        "district": "Ranchi",
        "claimType": "Community Forest Rights (CFR)",
        "status": "Pending",
        "areaClaimedHectares": 140.0,
        "submissionDate": "2023-06-01"
    }"#;

    let claim: Claim = serde_json::from_str(json).unwrap();
    assert!(claim.location.is_none());
}

#[test]
fn test_status_enumeration_is_closed() {
    assert_eq!(ClaimStatus::ALL.len(), 3);
    let err = serde_json::from_str::<ClaimStatus>("\"Withdrawn\"");
    assert!(err.is_err());
}

#[test]
fn test_claim_type_round_trips_display_names() {
    for ty in ClaimType::ALL {
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, format!("\"{}\"", ty));
        let back: ClaimType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
