//! # repute-core
//! Deterministic wallet reputation synthesis and trust scoring.
//!
//! Every function in this crate is pure: the same address always yields the
//! same numeric profile, and nothing is cached between calls.
//!
//! - [`prng`] — address-seeded sine generator
//! - [`synth`] — profile synthesizer (leases, reviews, disputes)
//! - [`score`] — weighted trust scorer
//! - [`verification`] — verified / pending / none classifier
//! - [`display`] — score tiers, labels and date formatting

pub mod constants;
pub mod display;
pub mod error;
pub mod prng;
pub mod score;
pub mod synth;
pub mod types;
pub mod verification;

pub use display::{format_date, score_label, score_tier, ScoreTier, TrustLabel};
pub use error::ReputeError;
pub use prng::SeededRng;
pub use score::compute_trust_score;
pub use synth::{synthesize_profile, synthesize_profile_at, synthesize_profile_with};
pub use types::{
    FeedbackCategory, FeedbackEntry, ScoreFactors, VerificationStatus, WalletReputationProfile,
};
pub use verification::classify_verification;
