//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random claims that maintain
//! domain invariants (unique ids, non-negative areas, closed enumerations).

use chrono::NaiveDate;
use core_kernel::{Claim, ClaimId, ClaimStatus, ClaimType, GeoPoint};
use proptest::prelude::*;

/// Strategy for generating valid ClaimStatus values
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for generating valid ClaimType values
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::IndividualForestRights),
        Just(ClaimType::CommunityForestRights),
    ]
}

/// Strategy for generating non-negative hectare areas
pub fn area_strategy() -> impl Strategy<Value = f64> {
    (0u32..500_000u32).prop_map(|n| f64::from(n) / 100.0)
}

/// Strategy for generating submission dates within the registry's range
pub fn submission_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2025i32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 always valid"))
}

/// Strategy for generating optional parcel coordinates
pub fn location_strategy() -> impl Strategy<Value = Option<GeoPoint>> {
    proptest::option::of((8.0f64..35.0f64, 68.0f64..97.0f64).prop_map(
        |(latitude, longitude)| GeoPoint { latitude, longitude },
    ))
}

/// Strategy for generating a claim with the given index baked into its id
///
/// Deriving the id from the index keeps ids unique within a generated set.
pub fn claim_strategy(index: usize) -> impl Strategy<Value = Claim> {
    (
        status_strategy(),
        claim_type_strategy(),
        area_strategy(),
        submission_date_strategy(),
        location_strategy(),
        prop_oneof![
            Just("Odisha"),
            Just("Jharkhand"),
            Just("Madhya Pradesh"),
            Just("Chhattisgarh"),
        ],
    )
        .prop_map(move |(status, claim_type, area, date, location, state)| Claim {
            claim_id: ClaimId::new(format!("FRA-GEN-{index:04}")).expect("generated id non-empty"),
            applicant_name: format!("Applicant {index}"),
            state: state.to_string(),
            district: "Test District".to_string(),
            claim_type,
            status,
            area_claimed_hectares: area,
            submission_date: date,
            location,
        })
}

/// Strategy for generating a claim set with unique ids
pub fn claim_set_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    (0..=max_len).prop_flat_map(|len| {
        let claims: Vec<_> = (0..len).map(claim_strategy).collect();
        claims
    })
}
