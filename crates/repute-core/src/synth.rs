//! Profile synthesizer.
//!
//! Builds a reproducible reputation profile from nothing but an address.
//! Draws are consumed from a [`SeededRng`] in a fixed order, and that order
//! is what makes the output reproducible:
//!
//! 1. total leases `[0, 20]`
//! 2. review count `[0, 5]`
//! 3. per review: category `[0, 3]`, rating `[1, 5]`, 55 reviewer-address
//!    digits `[0, 9]`, age in days `[0, 30]`, verified draw `[0, 10]`
//! 4. disputes `[0, 3]`
//!
//! Review comments are the one exception. They are picked from a fixed pool
//! by a separate, caller-supplied random source and are not part of the
//! seeded stream, so comment text is only reproducible if that source is.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::constants::{
    BASE_SUCCESS_OFFSET, MAX_BASE_SUCCESS, MAX_DISPUTES, MAX_LEASES, MAX_RATING,
    MAX_REVIEW_AGE_DAYS, MAX_REVIEWS, MIN_RATING, REVIEW_ID_ADDRESS_CHARS,
    REVIEWER_ADDRESS_DIGITS, REVIEWER_ADDRESS_PREFIX, VERIFIED_DRAW_MAX,
    VERIFIED_DRAW_THRESHOLD,
};
use crate::prng::SeededRng;
use crate::score::compute_trust_score;
use crate::types::{
    review_average, FeedbackCategory, FeedbackEntry, ScoreFactors, WalletReputationProfile,
};

// ---------------------------------------------------------------------------
// Comment pools
// ---------------------------------------------------------------------------

pub const POSITIVE_COMMENTS: [&str; 5] = [
    "Great experience working with this user!",
    "Very reliable and trustworthy.",
    "Assets returned in perfect condition.",
    "Excellent communication throughout the process.",
    "Would definitely work with again!",
];

pub const NEUTRAL_COMMENTS: [&str; 5] = [
    "Decent experience overall.",
    "Everything went as expected.",
    "No issues to report.",
    "Communication was adequate.",
    "Transaction completed successfully.",
];

pub const NEGATIVE_COMMENTS: [&str; 5] = [
    "Had some issues during the process.",
    "Communication could have been better.",
    "Delayed return of assets.",
    "Some minor problems with condition of returned items.",
    "Would be cautious about working with again.",
];

/// Comment pool for a rating: `>= 4` positive, `3` neutral, below that negative.
pub fn comment_pool(rating: u8) -> &'static [&'static str] {
    match rating {
        4..=u8::MAX => &POSITIVE_COMMENTS,
        3 => &NEUTRAL_COMMENTS,
        _ => &NEGATIVE_COMMENTS,
    }
}

/// Pick a comment for `rating` using `rng`.
pub fn pick_comment<R: Rng + ?Sized>(rating: u8, rng: &mut R) -> &'static str {
    let pool = comment_pool(rating);
    pool[rng.gen_range(0..pool.len())]
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// Everything the synthesizer produces before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticActivity {
    pub total_leases: u32,
    pub successful_returns: u32,
    pub failed_returns: u32,
    pub disputes_raised: u32,
    pub reviews: Vec<FeedbackEntry>,
}

impl SyntheticActivity {
    /// Inputs for the trust scorer.
    pub fn score_factors(&self) -> ScoreFactors {
        ScoreFactors::from_activity(
            review_average(self.reviews.iter().map(|r| r.rating)),
            self.reviews.len() as u32,
            self.total_leases,
            self.successful_returns,
            self.disputes_raised,
        )
    }

    /// Score the activity and attach it to `address`.
    pub fn into_profile(self, address: &str) -> WalletReputationProfile {
        let trust_score = compute_trust_score(&self.score_factors());
        WalletReputationProfile {
            address: address.to_string(),
            trust_score,
            total_leases: self.total_leases,
            successful_returns: self.successful_returns,
            failed_returns: self.failed_returns,
            disputes_raised: self.disputes_raised,
            reviews: self.reviews,
        }
    }
}

/// Share of leases returned successfully, derived from the review average.
///
/// `min(0.95, average / 5 + 0.2)`
pub fn base_success_ratio(review_average: f64) -> f64 {
    (review_average / MAX_RATING as f64 + BASE_SUCCESS_OFFSET).min(MAX_BASE_SUCCESS)
}

fn synthesize_review<R: Rng + ?Sized>(
    rng: &mut SeededRng,
    id: String,
    now: DateTime<Utc>,
    comment_rng: &mut R,
) -> FeedbackEntry {
    let category_index = rng.next_in(0, FeedbackCategory::ALL.len() as i64 - 1) as usize;
    let category = FeedbackCategory::ALL[category_index];
    let rating = rng.next_in(MIN_RATING as i64, MAX_RATING as i64) as u8;

    let mut from_address = String::with_capacity(REVIEWER_ADDRESS_DIGITS + 1);
    from_address.push(REVIEWER_ADDRESS_PREFIX);
    for _ in 0..REVIEWER_ADDRESS_DIGITS {
        from_address.push((b'0' + rng.next_in(0, 9) as u8) as char);
    }

    let comment = pick_comment(rating, comment_rng).to_string();
    let days_ago = rng.next_in(0, MAX_REVIEW_AGE_DAYS);
    let verified = rng.next_in(0, VERIFIED_DRAW_MAX) > VERIFIED_DRAW_THRESHOLD;

    FeedbackEntry {
        id,
        from_address,
        rating,
        comment,
        timestamp: now - Duration::days(days_ago),
        category,
        verified,
    }
}

/// Synthesize lease, review and dispute activity for `address`.
pub fn synthesize_activity<R: Rng + ?Sized>(
    address: &str,
    now: DateTime<Utc>,
    comment_rng: &mut R,
) -> SyntheticActivity {
    let mut rng = SeededRng::from_address(address);

    let total_leases = rng.next_in(0, MAX_LEASES) as u32;
    let review_count = rng.next_in(0, MAX_REVIEWS) as usize;

    let id_suffix: String = address.chars().take(REVIEW_ID_ADDRESS_CHARS).collect();
    let mut reviews = Vec::with_capacity(review_count);
    for i in 0..review_count {
        let id = format!("review-{i}-{id_suffix}");
        reviews.push(synthesize_review(&mut rng, id, now, &mut *comment_rng));
    }

    let average = review_average(reviews.iter().map(|r| r.rating));
    let successful_returns = (total_leases as f64 * base_success_ratio(average)).floor() as u32;
    let failed_returns = total_leases - successful_returns;
    let disputes_raised = rng.next_in(0, MAX_DISPUTES) as u32;

    debug!(
        address,
        total_leases,
        reviews = reviews.len(),
        disputes_raised,
        draws = rng.draws(),
        "activity synthesized"
    );

    SyntheticActivity {
        total_leases,
        successful_returns,
        failed_returns,
        disputes_raised,
        reviews,
    }
}

/// Synthesize a scored profile, pinning both the clock and the comment source.
///
/// With a seeded `comment_rng` the result is fully reproducible.
pub fn synthesize_profile_with<R: Rng + ?Sized>(
    address: &str,
    now: DateTime<Utc>,
    comment_rng: &mut R,
) -> WalletReputationProfile {
    synthesize_activity(address, now, comment_rng).into_profile(address)
}

/// Synthesize a scored profile as of `now`. Comment text is not reproducible.
pub fn synthesize_profile_at(address: &str, now: DateTime<Utc>) -> WalletReputationProfile {
    synthesize_profile_with(address, now, &mut rand::thread_rng())
}

/// Synthesize a scored profile as of the current wall clock.
///
/// # Examples
///
/// ```
/// use repute_core::synthesize_profile;
///
/// let p = synthesize_profile("GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2");
/// assert_eq!(p.successful_returns + p.failed_returns, p.total_leases);
/// assert!((1..=100).contains(&p.trust_score));
/// ```
pub fn synthesize_profile(address: &str) -> WalletReputationProfile {
    synthesize_profile_at(address, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FEE_ACCOUNT: &str = "GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    /// Drop the comment text, which is not part of the reproducible output.
    fn numeric(mut p: WalletReputationProfile) -> WalletReputationProfile {
        for r in &mut p.reviews {
            r.comment.clear();
        }
        p
    }

    #[test]
    fn known_profile_for_fee_account() {
        let p = synthesize_profile_at(FEE_ACCOUNT, now());
        assert_eq!(p.total_leases, 10);
        assert_eq!(p.reviews.len(), 1);
        assert_eq!(p.successful_returns, 9);
        assert_eq!(p.failed_returns, 1);
        assert_eq!(p.disputes_raised, 2);
        assert_eq!(p.trust_score, 75);

        let r = &p.reviews[0];
        assert_eq!(r.id, "review-0-GDA44R");
        assert_eq!(r.category, FeedbackCategory::Return);
        assert_eq!(r.rating, 5);
        assert_eq!(r.timestamp, now() - Duration::days(10));
        assert!(r.verified);
        assert!(POSITIVE_COMMENTS.contains(&r.comment.as_str()));
    }

    #[test]
    fn empty_address_is_total() {
        let p = synthesize_profile_at("", now());
        assert_eq!(p.address, "");
        assert_eq!(p.total_leases, 0);
        assert_eq!(p.reviews.len(), 4);
        assert_eq!(p.successful_returns, 0);
        assert_eq!(p.failed_returns, 0);
        assert_eq!(p.trust_score, 38);
        assert!(p.reviews.iter().all(|r| r.id.ends_with('-')));
    }

    #[test]
    fn disputes_may_exceed_leases() {
        let p = synthesize_profile_at("GCEZWKCA5VLDNRLN3RPRJMRZOX3Z6G5CHCGSNFHEYVXM3XOJMDS674JZ", now());
        assert_eq!(p.total_leases, 1);
        assert!(p.reviews.is_empty());
        assert_eq!(p.disputes_raised, 3);
        assert_eq!(p.trust_score, 1);
    }

    #[test]
    fn draws_follow_fixed_order() {
        // 2 header draws, 59 per review, then the dispute draw.
        let p = synthesize_profile_at(FEE_ACCOUNT, now());
        let mut rng = SeededRng::from_address(FEE_ACCOUNT);
        assert_eq!(rng.next_in(0, MAX_LEASES) as u32, p.total_leases);
        assert_eq!(rng.next_in(0, MAX_REVIEWS) as usize, p.reviews.len());
        for _ in 0..p.reviews.len() * 59 {
            rng.next_in(0, 9);
        }
        assert_eq!(rng.next_in(0, MAX_DISPUTES) as u32, p.disputes_raised);
        assert_eq!(rng.draws(), 62);
    }

    #[test]
    fn reviewer_addresses_have_fixed_shape() {
        let p = synthesize_profile_at("GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF", now());
        assert_eq!(p.reviews.len(), 4);
        for r in &p.reviews {
            assert_eq!(r.from_address.len(), 56);
            assert!(r.from_address.starts_with('G'));
            assert!(r.from_address[1..].bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn known_reviews_include_unverified() {
        let p = synthesize_profile_at("GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF", now());
        let summary: Vec<(FeedbackCategory, u8, i64, bool)> = p
            .reviews
            .iter()
            .map(|r| (r.category, r.rating, (now() - r.timestamp).num_days(), r.verified))
            .collect();
        assert_eq!(
            summary,
            vec![
                (FeedbackCategory::Communication, 1, 25, false),
                (FeedbackCategory::Return, 4, 17, true),
                (FeedbackCategory::Leasing, 5, 17, false),
                (FeedbackCategory::Leasing, 2, 27, true),
            ]
        );
        assert_eq!(p.verified_review_count(), 2);
        assert_eq!((p.total_leases, p.successful_returns, p.disputes_raised), (17, 13, 1));
        assert_eq!(p.trust_score, 58);
    }

    /// Deterministic spread of well-formed addresses.
    fn address_family(count: u64) -> impl Iterator<Item = String> {
        const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
        (0..count).map(|i| {
            let mut x = i;
            let mut addr = String::from("G");
            for _ in 0..55 {
                x = x
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                addr.push(ALPHABET[(x >> 59) as usize] as char);
            }
            addr
        })
    }

    #[test]
    fn verified_share_is_near_eight_in_eleven() {
        let (mut total, mut verified) = (0usize, 0usize);
        for addr in address_family(2000) {
            let p = synthesize_profile_at(&addr, now());
            total += p.reviews.len();
            verified += p.verified_review_count();
        }
        assert!(total > 4000);
        let share = verified as f64 / total as f64;
        assert!((share - 8.0 / 11.0).abs() < 0.03, "verified share {share}");
        assert!(verified < total);
    }

    #[test]
    fn seeded_comment_source_makes_profile_fully_reproducible() {
        let a = synthesize_profile_with(FEE_ACCOUNT, now(), &mut StdRng::seed_from_u64(7));
        let b = synthesize_profile_with(FEE_ACCOUNT, now(), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn comment_pool_tiers() {
        assert_eq!(comment_pool(5), &POSITIVE_COMMENTS);
        assert_eq!(comment_pool(4), &POSITIVE_COMMENTS);
        assert_eq!(comment_pool(3), &NEUTRAL_COMMENTS);
        assert_eq!(comment_pool(2), &NEGATIVE_COMMENTS);
        assert_eq!(comment_pool(1), &NEGATIVE_COMMENTS);
    }

    #[test]
    fn base_success_ratio_caps_at_095() {
        assert_eq!(base_success_ratio(5.0), 0.95);
        assert!((base_success_ratio(3.0) - 0.8).abs() < 1e-12);
        assert!((base_success_ratio(1.0) - 0.4).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn numeric_fields_are_deterministic(addr in ".{0,60}", seed_a in any::<u64>(), seed_b in any::<u64>()) {
            let a = synthesize_profile_with(&addr, now(), &mut StdRng::seed_from_u64(seed_a));
            let b = synthesize_profile_with(&addr, now(), &mut StdRng::seed_from_u64(seed_b));
            prop_assert_eq!(numeric(a), numeric(b));
        }

        #[test]
        fn profile_invariants_hold(addr in "G[A-Z2-7]{55}") {
            let p = synthesize_profile_at(&addr, now());
            prop_assert_eq!(p.successful_returns + p.failed_returns, p.total_leases);
            prop_assert!((1..=100).contains(&p.trust_score));
            prop_assert!(p.total_leases <= 20);
            prop_assert!(p.reviews.len() <= 5);
            prop_assert!(p.disputes_raised <= 3);

            let mut ids: Vec<&str> = p.reviews.iter().map(|r| r.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), p.reviews.len());

            for r in &p.reviews {
                prop_assert!((1..=5).contains(&r.rating));
                prop_assert!(comment_pool(r.rating).contains(&r.comment.as_str()));
                prop_assert!(r.timestamp <= now());
                prop_assert!(r.timestamp >= now() - Duration::days(30));
            }
        }

        #[test]
        fn verified_flag_follows_its_draw(addr in "G[A-Z2-7]{55}") {
            let p = synthesize_profile_at(&addr, now());
            let mut rng = SeededRng::from_address(&addr);
            rng.next_in(0, MAX_LEASES);
            rng.next_in(0, MAX_REVIEWS);
            for r in &p.reviews {
                // category, rating, 55 digits, age
                for _ in 0..58 {
                    rng.next_in(0, 9);
                }
                let draw = rng.next_in(0, VERIFIED_DRAW_MAX);
                prop_assert_eq!(r.verified, draw > 2, "draw {}", draw);
            }
        }

        #[test]
        fn trust_score_matches_rescoring(addr in "G[A-Z2-7]{55}") {
            let p = synthesize_profile_at(&addr, now());
            prop_assert_eq!(p.trust_score, compute_trust_score(&p.score_factors()));
        }
    }
}
