//! Reputation data model.
//!
//! Nothing here is persisted. Every value is rebuilt from the address on
//! each call, so the only identity a profile has is the address it was
//! synthesized from.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REVIEW_AVERAGE, DEFAULT_SUCCESS_RATE};
use crate::error::ReputeError;

// ---------------------------------------------------------------------------
// FeedbackCategory
// ---------------------------------------------------------------------------

/// What a piece of feedback is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    General,
    Leasing,
    Return,
    Communication,
}

impl FeedbackCategory {
    /// All categories in draw-index order. Index `i` of a `[0, 3]` draw maps
    /// to `ALL[i]`.
    pub const ALL: [FeedbackCategory; 4] = [
        FeedbackCategory::General,
        FeedbackCategory::Leasing,
        FeedbackCategory::Return,
        FeedbackCategory::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Leasing => "leasing",
            Self::Return => "return",
            Self::Communication => "communication",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FeedbackCategory {
    type Err = ReputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReputeError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// VerificationStatus
// ---------------------------------------------------------------------------

/// Identity verification state of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    None,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::None => "none",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = ReputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "pending" => Ok(Self::Pending),
            "none" => Ok(Self::None),
            _ => Err(ReputeError::UnknownVerificationStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FeedbackEntry
// ---------------------------------------------------------------------------

/// A single review left for an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    /// Unique within the containing profile.
    pub id: String,
    /// Reviewer address. Synthesized, not guaranteed to be a real account.
    pub from_address: String,
    /// Star rating, `1..=5`.
    pub rating: u8,
    pub comment: String,
    /// Serialized as Unix milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub category: FeedbackCategory,
    pub verified: bool,
}

// ---------------------------------------------------------------------------
// WalletReputationProfile
// ---------------------------------------------------------------------------

/// Synthesized reputation for one address.
///
/// # Invariants
///
/// * `1 <= trust_score <= 100`
/// * `successful_returns + failed_returns == total_leases`
/// * `disputes_raised` is not bounded by `total_leases`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletReputationProfile {
    pub address: String,
    pub trust_score: u8,
    pub total_leases: u32,
    pub successful_returns: u32,
    pub failed_returns: u32,
    pub disputes_raised: u32,
    /// In generation order.
    pub reviews: Vec<FeedbackEntry>,
}

impl WalletReputationProfile {
    /// Mean review rating, or `3.0` for an address with no reviews.
    pub fn review_average(&self) -> f64 {
        review_average(self.reviews.iter().map(|r| r.rating))
    }

    /// The inputs the trust score was computed from.
    pub fn score_factors(&self) -> ScoreFactors {
        ScoreFactors::from_activity(
            self.review_average(),
            self.reviews.len() as u32,
            self.total_leases,
            self.successful_returns,
            self.disputes_raised,
        )
    }

    /// Number of reviews with a verified reviewer.
    pub fn verified_review_count(&self) -> usize {
        self.reviews.iter().filter(|r| r.verified).count()
    }
}

/// Mean of `ratings`, or [`DEFAULT_REVIEW_AVERAGE`] when empty.
pub fn review_average(ratings: impl IntoIterator<Item = u8>) -> f64 {
    let (sum, count) = ratings
        .into_iter()
        .fold((0u32, 0u32), |(s, c), r| (s + r as u32, c + 1));
    if count == 0 {
        return DEFAULT_REVIEW_AVERAGE;
    }
    sum as f64 / count as f64
}

// ---------------------------------------------------------------------------
// ScoreFactors
// ---------------------------------------------------------------------------

/// Aggregate signals fed to the trust scorer.
///
/// Callers are responsible for keeping the fields inside their documented
/// domains; the scorer does not validate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactors {
    /// `1.0..=5.0`
    pub review_average: f64,
    pub review_count: u32,
    /// `0.0..=1.0`
    pub success_rate: f64,
    /// `>= 0.0`, may exceed `1.0`.
    pub dispute_rate: f64,
}

impl ScoreFactors {
    /// Derive the rates from raw lease activity.
    ///
    /// With no leases the success rate defaults to `0.5` and the dispute
    /// rate to `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repute_core::ScoreFactors;
    ///
    /// let f = ScoreFactors::from_activity(4.0, 3, 10, 8, 2);
    /// assert_eq!(f.success_rate, 0.8);
    /// assert_eq!(f.dispute_rate, 0.2);
    ///
    /// let idle = ScoreFactors::from_activity(3.0, 0, 0, 0, 3);
    /// assert_eq!(idle.success_rate, 0.5);
    /// assert_eq!(idle.dispute_rate, 0.0);
    /// ```
    pub fn from_activity(
        review_average: f64,
        review_count: u32,
        total_leases: u32,
        successful_returns: u32,
        disputes_raised: u32,
    ) -> Self {
        let (success_rate, dispute_rate) = if total_leases > 0 {
            (
                successful_returns as f64 / total_leases as f64,
                disputes_raised as f64 / total_leases as f64,
            )
        } else {
            (DEFAULT_SUCCESS_RATE, 0.0)
        };
        Self {
            review_average,
            review_count,
            success_rate,
            dispute_rate,
        }
    }
}
