//! Documented properties of the synthesis and scoring engine.

use proptest::prelude::*;

use repute_core::{
    classify_verification, compute_trust_score, score_label, score_tier, ScoreFactors, ScoreTier,
    TrustLabel, VerificationStatus,
};
use repute_tests::helpers::*;

fn factors(avg: f64, count: u32, success: f64, dispute: f64) -> ScoreFactors {
    ScoreFactors {
        review_average: avg,
        review_count: count,
        success_rate: success,
        dispute_rate: dispute,
    }
}

#[test]
fn determinism_excluding_comments() {
    for addr in TARGETS {
        assert_eq!(numeric_profile(addr, 1), numeric_profile(addr, 2));
    }
}

#[test]
fn conservation_of_leases() {
    for addr in TARGETS {
        let p = seeded_profile(addr, 0);
        assert_eq!(p.successful_returns + p.failed_returns, p.total_leases);
    }
}

#[test]
fn example_perfect_record() {
    assert_eq!(compute_trust_score(&factors(5.0, 10, 1.0, 0.0)), 90);
}

#[test]
fn example_worst_record_clamps() {
    assert_eq!(compute_trust_score(&factors(1.0, 0, 0.0, 1.0)), 1);
}

#[test]
fn label_boundaries() {
    assert_eq!(score_label(90), TrustLabel::Excellent);
    assert_eq!(score_label(89), TrustLabel::Good);
    assert_eq!(score_label(50), TrustLabel::Fair);
    assert_eq!(score_label(49), TrustLabel::Poor);
    assert_eq!(score_label(29), TrustLabel::Risky);
}

#[test]
fn tier_boundaries() {
    assert_eq!(score_tier(80), ScoreTier::Positive);
    assert_eq!(score_tier(50), ScoreTier::Caution);
    assert_eq!(score_tier(49), ScoreTier::Risk);
}

#[test]
fn profiles_serialize_with_wire_names() {
    let p = seeded_profile(FEE_ACCOUNT, 3);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["trustScore"], 75);
    assert_eq!(json["totalLeases"], 10);
    assert_eq!(json["successfulReturns"], 9);
    assert_eq!(json["failedReturns"], 1);
    assert_eq!(json["disputesRaised"], 2);
    assert_eq!(json["reviews"][0]["category"], "return");
    assert_eq!(json["reviews"][0]["id"], "review-0-GDA44R");
}

proptest! {
    #[test]
    fn score_bounds(
        avg in 1.0f64..=5.0,
        count in 0u32..500,
        success in 0.0f64..=1.0,
        dispute in 0.0f64..=20.0,
    ) {
        let s = compute_trust_score(&factors(avg, count, success, dispute));
        prop_assert!((1..=100).contains(&s));
    }

    #[test]
    fn monotone_in_disputes_and_success(
        avg in 1.0f64..=5.0,
        count in 0u32..20,
        success in 0.0f64..=1.0,
        dispute in 0.0f64..=3.0,
        bump in 0.0f64..=1.0,
    ) {
        let base = compute_trust_score(&factors(avg, count, success, dispute));
        prop_assert!(compute_trust_score(&factors(avg, count, success, dispute + bump)) <= base);
        let higher_success = (success + bump).min(1.0);
        prop_assert!(compute_trust_score(&factors(avg, count, higher_success, dispute)) >= base);
    }

    #[test]
    fn synthesized_profiles_are_deterministic(addr in ".{0,80}") {
        prop_assert_eq!(numeric_profile(&addr, 11), numeric_profile(&addr, 12));
    }

    #[test]
    fn synthesized_profiles_conserve_leases(addr in "G[A-Z2-7]{55}") {
        let p = seeded_profile(&addr, 0);
        prop_assert_eq!(p.successful_returns + p.failed_returns, p.total_leases);
        prop_assert!((1..=100).contains(&p.trust_score));
    }

    #[test]
    fn classifier_partitions_every_input(addr in ".{0,80}") {
        let status = classify_verification(&addr);
        prop_assert!(matches!(
            status,
            VerificationStatus::Verified | VerificationStatus::Pending | VerificationStatus::None
        ));
        prop_assert_eq!(status, classify_verification(&addr));
    }
}
