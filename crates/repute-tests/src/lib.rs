//! Integration test suite for Repute.
//!
//! Exercises the documented properties of the synthesis engine and the
//! full fee-gated lookup flow across crate boundaries.

pub mod helpers;
