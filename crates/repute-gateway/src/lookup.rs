//! Fee-gated reputation lookups.
//!
//! Viewing an address's profile costs one platform-fee payment. Once paid,
//! the address is remembered in the paid-views ledger and later lookups of
//! it are free. The core synthesizer is only called after the gate passes.
//!
//! Both ledgers are in-memory, scoped to one [`LookupService`], and guarded
//! by a single lock: a reader never sees an address in one list but not the
//! other.

use std::collections::{HashSet, VecDeque};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use repute_core::{
    classify_verification, score_label, score_tier, synthesize_profile_at, ScoreTier, TrustLabel,
    VerificationStatus, WalletReputationProfile,
};

use crate::address::validate_address;
use crate::error::GatewayError;
use crate::network::{Network, NetworkDetails};
use crate::payment::{PaymentReceipt, PaymentRequest};
use crate::traits::PaymentGateway;

/// Recent searches kept per service.
pub const MAX_RECENT_ADDRESSES: usize = 5;

// ---------------------------------------------------------------------------
// RecentAddresses
// ---------------------------------------------------------------------------

/// Most-recent-first list of searched addresses, capped and de-duplicated.
///
/// An address already in the list keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAddresses {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for RecentAddresses {
    fn default() -> Self {
        Self::with_capacity(MAX_RECENT_ADDRESSES)
    }
}

impl RecentAddresses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `address` at the front. Returns `false` if it was already present.
    pub fn record(&mut self, address: &str) -> bool {
        if self.contains(address) {
            return false;
        }
        self.entries.push_front(address.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn contains(&self, address: &str) -> bool {
        self.entries.iter().any(|a| a == address)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PaidViews
// ---------------------------------------------------------------------------

/// Addresses whose lookup fee has been paid, newest first.
#[derive(Debug, Clone, Default)]
pub struct PaidViews {
    order: VecDeque<String>,
    index: HashSet<String>,
}

impl PaidViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `address` as paid. Returns `false` if it already was.
    pub fn record(&mut self, address: &str) -> bool {
        if !self.index.insert(address.to_string()) {
            return false;
        }
        self.order.push_front(address.to_string());
        true
    }

    pub fn contains(&self, address: &str) -> bool {
        self.index.contains(address)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ---------------------------------------------------------------------------
// LookupService
// ---------------------------------------------------------------------------

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutcome {
    pub profile: WalletReputationProfile,
    pub verification: VerificationStatus,
    /// `None` when the address had already been paid for.
    pub receipt: Option<PaymentReceipt>,
}

impl LookupOutcome {
    pub fn label(&self) -> TrustLabel {
        score_label(self.profile.trust_score)
    }

    pub fn tier(&self) -> ScoreTier {
        score_tier(self.profile.trust_score)
    }
}

#[derive(Debug, Default)]
struct LookupLedgers {
    paid_views: PaidViews,
    recent: RecentAddresses,
}

/// Charges the lookup fee through a [`PaymentGateway`] and serves profiles.
pub struct LookupService<G> {
    gateway: G,
    ledgers: Mutex<LookupLedgers>,
}

impl<G: PaymentGateway> LookupService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            ledgers: Mutex::new(LookupLedgers::default()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn has_paid_view(&self, address: &str) -> bool {
        self.ledgers.lock().paid_views.contains(address)
    }

    /// Paid addresses, newest first.
    pub fn paid_views(&self) -> Vec<String> {
        self.ledgers.lock().paid_views.to_vec()
    }

    /// Recently searched addresses, newest first.
    pub fn recent_searches(&self) -> Vec<String> {
        self.ledgers.lock().recent.to_vec()
    }

    /// Network the wallet is on. A failed query is treated as testnet.
    pub async fn resolve_network(&self) -> NetworkDetails {
        match self.gateway.network().await {
            Ok(info) => info.resolve(),
            Err(e) => {
                warn!(error = %e, "network query failed, assuming testnet");
                NetworkDetails::of(Network::Testnet)
            }
        }
    }

    /// Charge `viewer` the platform lookup fee.
    ///
    /// Fails before submitting anything if the viewer's account is missing
    /// or the wallet is not on testnet.
    pub async fn pay_lookup_fee(&self, viewer: &str) -> Result<PaymentReceipt, GatewayError> {
        validate_address(viewer)?;
        if !self.gateway.account_exists(viewer).await? {
            return Err(GatewayError::AccountNotFound(viewer.to_string()));
        }

        let details = self.resolve_network().await;
        details.require(Network::Testnet)?;

        let request = PaymentRequest::platform_fee(viewer, Network::Testnet)?;
        let receipt = self.gateway.submit(&request).await?;
        info!(
            viewer,
            tx = receipt.short_hash(),
            amount = request.amount_stroops,
            "lookup fee paid"
        );
        Ok(receipt)
    }

    /// Look up `target` as of the current wall clock.
    pub async fn lookup(&self, viewer: &str, target: &str) -> Result<LookupOutcome, GatewayError> {
        self.lookup_at(viewer, target, Utc::now()).await
    }

    /// Look up `target`, charging `viewer` unless it was already paid for.
    pub async fn lookup_at(
        &self,
        viewer: &str,
        target: &str,
        now: DateTime<Utc>,
    ) -> Result<LookupOutcome, GatewayError> {
        validate_address(target)?;

        let receipt = if self.has_paid_view(target) {
            debug!(address = target, "lookup already paid");
            None
        } else {
            let receipt = self.pay_lookup_fee(viewer).await?;
            {
                let mut ledgers = self.ledgers.lock();
                ledgers.paid_views.record(target);
                ledgers.recent.record(target);
            }
            Some(receipt)
        };

        let profile = synthesize_profile_at(target, now);
        let verification = classify_verification(target);
        debug!(address = target, trust_score = profile.trust_score, %verification, "lookup served");

        Ok(LookupOutcome {
            profile,
            verification,
            receipt,
        })
    }
}
