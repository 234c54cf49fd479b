//! Presentation helpers: score tiers, labels and dates.
//!
//! Only the numeric thresholds are fixed here; styling is up to the caller.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-way colour classification of a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// `>= 80`
    Positive,
    /// `50..=79`
    Caution,
    /// `< 50`
    Risk,
}

impl ScoreTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Caution => "caution",
            Self::Risk => "risk",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Five-way label of a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustLabel {
    Excellent,
    Good,
    Fair,
    Poor,
    Risky,
}

impl TrustLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Risky => "Risky",
        }
    }
}

impl fmt::Display for TrustLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Colour tier of `score`.
///
/// | Score  | Tier     |
/// |--------|----------|
/// | 80+    | Positive |
/// | 50–79  | Caution  |
/// | < 50   | Risk     |
pub fn score_tier(score: u8) -> ScoreTier {
    match score {
        80.. => ScoreTier::Positive,
        50..=79 => ScoreTier::Caution,
        _ => ScoreTier::Risk,
    }
}

/// Label of `score`. Each tier includes its lower bound.
///
/// # Examples
///
/// ```
/// use repute_core::{score_label, TrustLabel};
///
/// assert_eq!(score_label(90), TrustLabel::Excellent);
/// assert_eq!(score_label(89), TrustLabel::Good);
/// assert_eq!(score_label(29).as_str(), "Risky");
/// ```
pub fn score_label(score: u8) -> TrustLabel {
    match score {
        90.. => TrustLabel::Excellent,
        70..=89 => TrustLabel::Good,
        50..=69 => TrustLabel::Fair,
        30..=49 => TrustLabel::Poor,
        _ => TrustLabel::Risky,
    }
}

/// Render as `"Oct 18, 2026"`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
