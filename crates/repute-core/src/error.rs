//! Error types for repute-core.
//!
//! Synthesis and scoring are total; only the string parsers can fail.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReputeError {
    #[error("unknown feedback category: {0}")] UnknownCategory(String),
    #[error("unknown verification status: {0}")] UnknownVerificationStatus(String),
}
