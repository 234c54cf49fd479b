//! Gateway error types.

use thiserror::Error;

/// Errors raised at the wallet/ledger boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Address is not a 56-character `G...` account id.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Account does not exist on the ledger.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// Wallet is connected to the wrong network.
    #[error("network mismatch: expected {expected}, got {actual}")]
    NetworkMismatch {
        /// Network the operation requires.
        expected: String,
        /// Network the wallet reported.
        actual: String,
    },

    /// Network name not recognised.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Invalid payment amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Memo too long for a text memo.
    #[error("invalid memo: {0}")]
    InvalidMemo(String),

    /// Source balance does not cover amount plus fee.
    #[error("insufficient funds: have {have}, need {need}")]
    InsufficientFunds {
        /// Available balance in stroops.
        have: u64,
        /// Required amount in stroops.
        need: u64,
    },

    /// Star rating outside `1..=5`.
    #[error("invalid rating: {0}")]
    InvalidRating(u8),

    /// Comment too short or too long.
    #[error("invalid comment: {0}")]
    InvalidComment(String),

    /// No lease with this id.
    #[error("lease not found: {0}")]
    LeaseNotFound(u64),

    /// No dispute was raised for this lease.
    #[error("dispute not found for lease {0}")]
    DisputeNotFound(u64),

    /// Lease was already returned or closed by a resolved dispute.
    #[error("lease {0} is not active")]
    LeaseNotActive(u64),

    /// Lease already has an open or settled dispute.
    #[error("lease {0} is already under dispute")]
    AlreadyDisputed(u64),

    /// Dispute was already resolved.
    #[error("dispute for lease {0} already resolved")]
    DisputeAlreadyResolved(u64),

    /// Lease duration cannot be represented.
    #[error("invalid lease duration: {0}")]
    InvalidDuration(String),

    /// The wallet declined to sign.
    #[error("transaction was not signed by the user")]
    Rejected,

    /// Ledger refused the signed transaction.
    #[error("submission failed: {0}")]
    Submission(String),
}
