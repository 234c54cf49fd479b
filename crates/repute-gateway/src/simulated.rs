//! In-memory ledger implementing [`PaymentGateway`] and [`FeedbackLedger`].
//!
//! Accounts and balances live in a map; submitting a payment debits the
//! source (amount plus fee) and credits the destination. A configurable
//! delay stands in for network round-trips.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::GatewayError;
use crate::feedback::FeedbackSubmission;
use crate::network::{Network, NetworkInfo};
use crate::payment::{transaction_hash, PaymentReceipt, PaymentRequest};
use crate::traits::{FeedbackLedger, PaymentGateway};

/// Simulated wallet bridge and ledger.
pub struct SimulatedGateway {
    network_info: NetworkInfo,
    balances: Mutex<HashMap<String, u64>>,
    latency: Duration,
    sequence: AtomicU64,
    reject_signing: bool,
}

impl SimulatedGateway {
    /// Empty ledger on `network` with no latency.
    pub fn new(network: Network) -> Self {
        Self::with_network_info(NetworkInfo::from(network))
    }

    /// Empty ledger that reports `info` verbatim from [`PaymentGateway::network`].
    pub fn with_network_info(info: NetworkInfo) -> Self {
        Self {
            network_info: info,
            balances: Mutex::new(HashMap::new()),
            latency: Duration::ZERO,
            sequence: AtomicU64::new(0),
            reject_signing: false,
        }
    }

    /// Delay applied before every ledger call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make the wallet decline every signature request.
    pub fn rejecting_signatures(mut self) -> Self {
        self.reject_signing = true;
        self
    }

    /// Create or top up `address` with `stroops`.
    pub fn fund(&self, address: &str, stroops: u64) {
        let mut balances = self.balances.lock();
        let balance = balances.entry(address.to_string()).or_insert(0);
        *balance = balance.saturating_add(stroops);
    }

    /// Current balance, or `None` for an unknown account.
    pub fn balance(&self, address: &str) -> Option<u64> {
        self.balances.lock().get(address).copied()
    }

    /// Number of transactions accepted so far.
    pub fn submitted_count(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn passphrase(&self) -> String {
        self.network_info.resolve().passphrase
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn network(&self) -> Result<NetworkInfo, GatewayError> {
        self.round_trip().await;
        Ok(self.network_info.clone())
    }

    async fn account_exists(&self, address: &str) -> Result<bool, GatewayError> {
        self.round_trip().await;
        Ok(self.balances.lock().contains_key(address))
    }

    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError> {
        self.round_trip().await;

        if self.reject_signing {
            return Err(GatewayError::Rejected);
        }
        let passphrase = self.passphrase();
        if request.network_passphrase != passphrase {
            return Err(GatewayError::Submission(format!(
                "transaction signed for '{}' but ledger is '{passphrase}'",
                request.network_passphrase
            )));
        }

        {
            let mut balances = self.balances.lock();
            let have = *balances
                .get(&request.source)
                .ok_or_else(|| GatewayError::AccountNotFound(request.source.clone()))?;
            let need = request.total_cost();
            if have < need {
                return Err(GatewayError::InsufficientFunds { have, need });
            }
            balances.insert(request.source.clone(), have - need);
            let dest = balances.entry(request.destination.clone()).or_insert(0);
            *dest = dest.saturating_add(request.amount_stroops);
        }

        let sequence = self.next_sequence();
        let tx_hash = transaction_hash(&request.envelope_bytes(), sequence);
        info!(
            source = %request.source,
            destination = %request.destination,
            amount = request.amount_stroops,
            %tx_hash,
            "simulated payment accepted"
        );

        Ok(PaymentReceipt {
            tx_hash,
            source: request.source.clone(),
            destination: request.destination.clone(),
            amount_stroops: request.amount_stroops,
            fee_stroops: request.fee_stroops,
            submitted_at: Utc::now(),
        })
    }
}

#[async_trait]
impl FeedbackLedger for SimulatedGateway {
    async fn record(
        &self,
        from: &str,
        submission: &FeedbackSubmission,
    ) -> Result<String, GatewayError> {
        self.round_trip().await;
        let sequence = self.next_sequence();
        let tx_hash = transaction_hash(&submission.envelope_bytes(from), sequence);
        debug!(from, to = %submission.address, %tx_hash, "simulated feedback recorded");
        Ok(tx_hash)
    }
}
