//! Identity verification classifier.
//!
//! A single sine draw of the address seed, independent of the synthesizer's
//! stream: classifying an address never advances or depends on any counter.

use crate::prng::{address_seed, fractional};
use crate::types::VerificationStatus;

/// Fractions strictly above this are `Verified`.
pub const VERIFIED_THRESHOLD: f64 = 0.7;

/// Fractions strictly above this (and not verified) are `Pending`.
pub const PENDING_THRESHOLD: f64 = 0.3;

/// `sin(seed) - floor(sin(seed))` for the address seed.
pub fn verification_fraction(address: &str) -> f64 {
    fractional((address_seed(address) as f64).sin())
}

/// Map a fraction in `[0, 1]` to a status.
pub fn status_for_fraction(frac: f64) -> VerificationStatus {
    if frac > VERIFIED_THRESHOLD {
        VerificationStatus::Verified
    } else if frac > PENDING_THRESHOLD {
        VerificationStatus::Pending
    } else {
        VerificationStatus::None
    }
}

/// Classify `address`.
///
/// # Examples
///
/// ```
/// use repute_core::{classify_verification, VerificationStatus};
///
/// assert_eq!(classify_verification(""), VerificationStatus::None);
/// assert_eq!(classify_verification("GVERIFIED"), VerificationStatus::Verified);
/// ```
pub fn classify_verification(address: &str) -> VerificationStatus {
    status_for_fraction(verification_fraction(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::SeededRng;
    use proptest::prelude::*;

    #[test]
    fn known_addresses() {
        // seeds 661, 588, 426
        assert_eq!(classify_verification("GVERIFIED"), VerificationStatus::Verified);
        assert_eq!(classify_verification("GPENDING"), VerificationStatus::Pending);
        assert_eq!(classify_verification("GGAMMA"), VerificationStatus::None);
        assert_eq!(
            classify_verification("GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2"),
            VerificationStatus::Pending
        );
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(status_for_fraction(0.7), VerificationStatus::Pending);
        assert_eq!(status_for_fraction(0.7000001), VerificationStatus::Verified);
        assert_eq!(status_for_fraction(0.3), VerificationStatus::None);
        assert_eq!(status_for_fraction(0.3000001), VerificationStatus::Pending);
        assert_eq!(status_for_fraction(0.0), VerificationStatus::None);
    }

    #[test]
    fn independent_of_profile_stream() {
        let addr = "GPENDING";
        let before = classify_verification(addr);
        let mut rng = SeededRng::from_address(addr);
        for _ in 0..100 {
            rng.next_in(0, 9);
        }
        assert_eq!(classify_verification(addr), before);
    }

    proptest! {
        #[test]
        fn deterministic_per_address(addr in ".{0,64}") {
            prop_assert_eq!(classify_verification(&addr), classify_verification(&addr));
        }

        #[test]
        fn fraction_in_unit_interval(addr in ".{0,64}") {
            let f = verification_fraction(&addr);
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}
