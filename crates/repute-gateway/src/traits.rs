//! Trait interfaces at the wallet/ledger boundary.
//!
//! - [`PaymentGateway`] — network discovery, account lookup, sign-and-submit
//! - [`FeedbackLedger`] — records a feedback submission as a transaction

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::feedback::FeedbackSubmission;
use crate::network::NetworkInfo;
use crate::payment::{PaymentReceipt, PaymentRequest};

/// A wallet bridge plus ledger client capable of charging a payment.
///
/// Implementations own signing; callers only ever see the receipt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Network the wallet is currently connected to, as reported.
    async fn network(&self) -> Result<NetworkInfo, GatewayError>;

    /// Whether `address` exists on the ledger.
    async fn account_exists(&self, address: &str) -> Result<bool, GatewayError>;

    /// Sign `request` with the source account and submit it.
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError>;
}

/// Destination for feedback records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackLedger: Send + Sync {
    /// Record `submission` from `from`, returning the transaction hash.
    async fn record(
        &self,
        from: &str,
        submission: &FeedbackSubmission,
    ) -> Result<String, GatewayError>;
}
