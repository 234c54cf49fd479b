//! Weighted trust scorer.
//!
//! Maps aggregate reputation signals to an integer score in `1..=100`.
//!
//! | Signal                     | Scaled to      | Weight |
//! |----------------------------|----------------|--------|
//! | review average (1–5)       | `avg * 20`     | 0.4    |
//! | review count (capped 10)   | `min(n,10)*10` | 0.1    |
//! | success rate (0–1)         | `rate * 100`   | 0.4    |
//! | dispute rate (≥ 0)         | `rate * 100`   | −0.1   |

use tracing::trace;

use crate::constants::{MAX_TRUST_SCORE, MIN_TRUST_SCORE};
use crate::types::ScoreFactors;

/// Weight of the scaled review average.
pub const WEIGHT_REVIEW_AVERAGE: f64 = 0.4;
/// Weight of the normalized review count.
pub const WEIGHT_REVIEW_COUNT: f64 = 0.1;
/// Weight of the success rate.
pub const WEIGHT_SUCCESS_RATE: f64 = 0.4;
/// Weight of the dispute rate. Negative: disputes only ever lower the score.
pub const WEIGHT_DISPUTE_RATE: f64 = -0.1;

/// Review counts above this contribute nothing extra.
pub const REVIEW_COUNT_SATURATION: u32 = 10;

/// Unrounded weighted sum of `factors`.
pub fn raw_score(factors: &ScoreFactors) -> f64 {
    let review_score = factors.review_average * 20.0;
    let normalized_count = factors.review_count.min(REVIEW_COUNT_SATURATION) as f64
        / REVIEW_COUNT_SATURATION as f64;

    review_score * WEIGHT_REVIEW_AVERAGE
        + normalized_count * 100.0 * WEIGHT_REVIEW_COUNT
        + factors.success_rate * 100.0 * WEIGHT_SUCCESS_RATE
        + factors.dispute_rate * 100.0 * WEIGHT_DISPUTE_RATE
}

/// Compute the trust score for `factors`.
///
/// The weighted sum is rounded half-up and clamped to `1..=100`.
///
/// # Examples
///
/// ```
/// use repute_core::{compute_trust_score, ScoreFactors};
///
/// let best = ScoreFactors { review_average: 5.0, review_count: 10, success_rate: 1.0, dispute_rate: 0.0 };
/// assert_eq!(compute_trust_score(&best), 90);
///
/// let worst = ScoreFactors { review_average: 1.0, review_count: 0, success_rate: 0.0, dispute_rate: 1.0 };
/// assert_eq!(compute_trust_score(&worst), 1);
/// ```
pub fn compute_trust_score(factors: &ScoreFactors) -> u8 {
    let raw = raw_score(factors);
    let rounded = (raw + 0.5).floor();
    let score = rounded.clamp(MIN_TRUST_SCORE as f64, MAX_TRUST_SCORE as f64) as u8;
    trace!(raw, score, "trust score computed");
    score
}
