//! Synthesis and scoring constants.
//!
//! The draw ranges here are part of the reproducibility contract: changing
//! any of them changes every synthesized profile.

/// Inclusive upper bound for the synthesized lease count.
pub const MAX_LEASES: i64 = 20;

/// Inclusive upper bound for the number of synthesized reviews.
pub const MAX_REVIEWS: i64 = 5;

/// Inclusive upper bound for synthesized disputes.
pub const MAX_DISPUTES: i64 = 3;

/// Reviews are backdated by up to this many days.
pub const MAX_REVIEW_AGE_DAYS: i64 = 30;

/// Number of digit draws appended to the reviewer address prefix.
pub const REVIEWER_ADDRESS_DIGITS: usize = 55;

/// Leading marker character of a synthesized reviewer address.
pub const REVIEWER_ADDRESS_PREFIX: char = 'G';

/// Length of the address prefix embedded in review ids.
pub const REVIEW_ID_ADDRESS_CHARS: usize = 6;

/// Upper bound of the draw that decides whether a review is verified.
pub const VERIFIED_DRAW_MAX: i64 = 10;

/// A review is verified when its draw is strictly greater than this.
pub const VERIFIED_DRAW_THRESHOLD: i64 = 2;

/// Review average assumed when an address has no reviews.
pub const DEFAULT_REVIEW_AVERAGE: f64 = 3.0;

/// Ceiling of the return success ratio derived from reviews.
pub const MAX_BASE_SUCCESS: f64 = 0.95;

/// Added to `review_average / 5` when deriving the return success ratio.
pub const BASE_SUCCESS_OFFSET: f64 = 0.2;

/// Success rate assumed for an address with no leases.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.5;

/// Scale applied to the sine draw before taking its fractional part.
pub const SINE_SCALE: f64 = 10_000.0;

/// Lowest possible trust score.
pub const MIN_TRUST_SCORE: u8 = 1;

/// Highest possible trust score.
pub const MAX_TRUST_SCORE: u8 = 100;

/// Lowest star rating.
pub const MIN_RATING: u8 = 1;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;
