//! Address-seeded pseudo-random draws.
//!
//! The generator is the classic `fract(sin(n) * 10000)` construction: the
//! seed is the sum of the address's code points and every draw consumes the
//! next integer `n`. It is a display/demo generator, not a security primitive.
//!
//! Reproducibility is the whole contract. Two generators built from the same
//! address and asked for the same sequence of ranges return identical values.

use crate::constants::SINE_SCALE;

/// Sum of the Unicode code points of `address`. The empty string seeds `0`.
///
/// # Examples
///
/// ```
/// use repute_core::prng::address_seed;
///
/// assert_eq!(address_seed(""), 0);
/// assert_eq!(address_seed("AB"), 65 + 66);
/// ```
pub fn address_seed(address: &str) -> u64 {
    address.chars().map(|c| c as u64).sum()
}

/// Fractional part of `x`. In `[0, 1)` except that inputs a hair below an
/// integer may round to exactly `1.0`.
pub fn fractional(x: f64) -> f64 {
    x - x.floor()
}

/// Fractional part of `sin(n) * 10000`.
pub fn scaled_sine_fraction(n: f64) -> f64 {
    fractional(n.sin() * SINE_SCALE)
}

/// Deterministic draw stream derived from a wallet address.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRng {
    counter: u64,
    draws: u64,
}

impl SeededRng {
    /// Start a stream seeded from `address`.
    pub fn from_address(address: &str) -> Self {
        Self::from_seed(address_seed(address))
    }

    /// Start a stream at an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            counter: seed,
            draws: 0,
        }
    }

    /// Draw an integer uniformly mapped into the inclusive range `[min, max]`.
    ///
    /// Every call advances the stream by one step, whatever the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use repute_core::SeededRng;
    ///
    /// let mut a = SeededRng::from_address("GABC");
    /// let mut b = SeededRng::from_address("GABC");
    /// assert_eq!(a.next_in(0, 20), b.next_in(0, 20));
    /// assert_eq!(a.draws(), 1);
    /// ```
    pub fn next_in(&mut self, min: i64, max: i64) -> i64 {
        let frac = scaled_sine_fraction(self.counter as f64);
        self.counter = self.counter.wrapping_add(1);
        self.draws += 1;

        let span = (max - min + 1) as f64;
        // fract() of a value just below an integer can round up to 1.0
        let value = (frac * span).floor() as i64 + min;
        value.min(max)
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
