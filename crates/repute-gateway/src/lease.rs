//! Lease and dispute ledger.
//!
//! Tracks asset leases between an owner and a lessee, disputes raised
//! against them, and a running per-account reputation tally.
//!
//! A lease starts active. Returning it closes it and credits or debits the
//! lessee. A dispute can be raised once while the lease is active; resolving
//! it closes the lease. Disputes count against whoever raised them, not the
//! lessee, so an account's dispute count is not bounded by its lease count.
//!
//! [`LeaseBook`] holds the state and requires `&mut self`; [`LeaseLedger`]
//! wraps it in a mutex for shared use.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::address::validate_address;
use crate::error::GatewayError;

/// Tally credit for a lease returned on time.
pub const ON_TIME_RETURN_CREDIT: u64 = 10;

/// Tally debit for a late return. The tally never goes below zero.
pub const LATE_RETURN_PENALTY: u64 = 5;

/// An asset lease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    /// Sequential, starting at 1.
    pub lease_id: u64,
    pub asset_name: String,
    pub owner: String,
    pub lessee: String,
    /// In stroops.
    pub amount_paid: u64,
    pub lease_start: DateTime<Utc>,
    pub lease_end: DateTime<Utc>,
    pub is_returned: bool,
    /// Cleared by a return or by resolving a dispute.
    pub is_active: bool,
    pub dispute: bool,
}

/// A dispute raised against a lease. At most one per lease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub lease_id: u64,
    pub raised_by: String,
    pub reason: String,
    pub resolved: bool,
    /// Outcome of the resolution; `false` until resolved.
    pub valid: bool,
}

/// Per-account tally kept by the ledger.
///
/// `trust_score` here is the ledger's own running count, unrelated to the
/// synthesized `1..=100` score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseReputation {
    pub total_leases: u64,
    pub successful_returns: u64,
    pub failed_returns: u64,
    pub disputes_raised: u64,
    pub trust_score: u64,
}

/// Lease, dispute and reputation state.
#[derive(Debug, Default)]
pub struct LeaseBook {
    last_lease_id: u64,
    leases: HashMap<u64, Lease>,
    disputes: HashMap<u64, Dispute>,
    reputations: HashMap<String, LeaseReputation>,
}

impl LeaseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a lease starting at `now` and return its id.
    pub fn create_lease(
        &mut self,
        asset_name: &str,
        owner: &str,
        lessee: &str,
        amount_paid: u64,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<u64, GatewayError> {
        validate_address(owner)?;
        validate_address(lessee)?;
        let span = chrono::Duration::from_std(duration)
            .map_err(|e| GatewayError::InvalidDuration(e.to_string()))?;
        let lease_end = now
            .checked_add_signed(span)
            .ok_or_else(|| GatewayError::InvalidDuration("lease end out of range".into()))?;

        let lease_id = self.last_lease_id + 1;
        self.leases.insert(
            lease_id,
            Lease {
                lease_id,
                asset_name: asset_name.to_string(),
                owner: owner.to_string(),
                lessee: lessee.to_string(),
                amount_paid,
                lease_start: now,
                lease_end,
                is_returned: false,
                is_active: true,
                dispute: false,
            },
        );
        self.last_lease_id = lease_id;

        info!(lease_id, owner, lessee, amount_paid, "lease created");
        Ok(lease_id)
    }

    /// Close an active lease and update the lessee's tally.
    ///
    /// Returns the lessee's tally after the update.
    pub fn return_asset(
        &mut self,
        lease_id: u64,
        on_time: bool,
    ) -> Result<LeaseReputation, GatewayError> {
        let lease = self
            .leases
            .get_mut(&lease_id)
            .ok_or(GatewayError::LeaseNotFound(lease_id))?;
        if !lease.is_active || lease.is_returned {
            return Err(GatewayError::LeaseNotActive(lease_id));
        }
        lease.is_returned = true;
        lease.is_active = false;

        let rep = self.reputations.entry(lease.lessee.clone()).or_default();
        rep.total_leases += 1;
        if on_time {
            rep.successful_returns += 1;
            rep.trust_score += ON_TIME_RETURN_CREDIT;
        } else {
            rep.failed_returns += 1;
            rep.trust_score = rep.trust_score.saturating_sub(LATE_RETURN_PENALTY);
        }

        info!(lease_id, on_time, lessee = %lease.lessee, "lease returned");
        Ok(*rep)
    }

    /// Open a dispute on an active, undisputed lease.
    pub fn raise_dispute(
        &mut self,
        lease_id: u64,
        raised_by: &str,
        reason: &str,
    ) -> Result<(), GatewayError> {
        validate_address(raised_by)?;
        let lease = self
            .leases
            .get_mut(&lease_id)
            .ok_or(GatewayError::LeaseNotFound(lease_id))?;
        if !lease.is_active {
            return Err(GatewayError::LeaseNotActive(lease_id));
        }
        if lease.dispute {
            return Err(GatewayError::AlreadyDisputed(lease_id));
        }
        lease.dispute = true;

        self.disputes.insert(
            lease_id,
            Dispute {
                lease_id,
                raised_by: raised_by.to_string(),
                reason: reason.to_string(),
                resolved: false,
                valid: false,
            },
        );
        self.reputations
            .entry(raised_by.to_string())
            .or_default()
            .disputes_raised += 1;

        info!(lease_id, raised_by, "dispute raised");
        Ok(())
    }

    /// Settle the dispute on `lease_id` and close the lease.
    pub fn resolve_dispute(&mut self, lease_id: u64, valid: bool) -> Result<Dispute, GatewayError> {
        let dispute = self
            .disputes
            .get_mut(&lease_id)
            .ok_or(GatewayError::DisputeNotFound(lease_id))?;
        let lease = self
            .leases
            .get_mut(&lease_id)
            .ok_or(GatewayError::LeaseNotFound(lease_id))?;
        if dispute.resolved {
            return Err(GatewayError::DisputeAlreadyResolved(lease_id));
        }
        dispute.resolved = true;
        dispute.valid = valid;
        lease.is_active = false;

        info!(lease_id, valid, "dispute resolved");
        Ok(dispute.clone())
    }

    pub fn lease(&self, lease_id: u64) -> Result<&Lease, GatewayError> {
        self.leases
            .get(&lease_id)
            .ok_or(GatewayError::LeaseNotFound(lease_id))
    }

    pub fn dispute(&self, lease_id: u64) -> Result<&Dispute, GatewayError> {
        self.disputes
            .get(&lease_id)
            .ok_or(GatewayError::DisputeNotFound(lease_id))
    }

    /// Tally for `account`; all zeros if it has no history.
    pub fn reputation(&self, account: &str) -> LeaseReputation {
        self.reputations.get(account).copied().unwrap_or_default()
    }

    /// Number of leases ever created.
    pub fn lease_count(&self) -> u64 {
        self.last_lease_id
    }
}

/// Shared handle to a [`LeaseBook`]. Each operation takes the lock once.
#[derive(Debug, Default)]
pub struct LeaseLedger {
    book: Mutex<LeaseBook>,
}

impl LeaseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a lease starting now.
    pub fn create_lease(
        &self,
        asset_name: &str,
        owner: &str,
        lessee: &str,
        amount_paid: u64,
        duration: Duration,
    ) -> Result<u64, GatewayError> {
        self.create_lease_at(asset_name, owner, lessee, amount_paid, duration, Utc::now())
    }

    pub fn create_lease_at(
        &self,
        asset_name: &str,
        owner: &str,
        lessee: &str,
        amount_paid: u64,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<u64, GatewayError> {
        self.book
            .lock()
            .create_lease(asset_name, owner, lessee, amount_paid, duration, now)
    }

    pub fn return_asset(&self, lease_id: u64, on_time: bool) -> Result<LeaseReputation, GatewayError> {
        self.book.lock().return_asset(lease_id, on_time)
    }

    pub fn raise_dispute(
        &self,
        lease_id: u64,
        raised_by: &str,
        reason: &str,
    ) -> Result<(), GatewayError> {
        self.book.lock().raise_dispute(lease_id, raised_by, reason)
    }

    pub fn resolve_dispute(&self, lease_id: u64, valid: bool) -> Result<Dispute, GatewayError> {
        self.book.lock().resolve_dispute(lease_id, valid)
    }

    pub fn lease(&self, lease_id: u64) -> Result<Lease, GatewayError> {
        self.book.lock().lease(lease_id).cloned()
    }

    pub fn dispute(&self, lease_id: u64) -> Result<Dispute, GatewayError> {
        self.book.lock().dispute(lease_id).cloned()
    }

    pub fn reputation(&self, account: &str) -> LeaseReputation {
        self.book.lock().reputation(account)
    }

    pub fn lease_count(&self) -> u64 {
        self.book.lock().lease_count()
    }
}
