//! # repute-gateway — the payment boundary around repute-core.
//!
//! repute-core is pure and never checks payment. This crate is the
//! collaborator that does: it defines the wallet/ledger contract, resolves
//! the wallet bridge's network response once at the boundary, charges the
//! platform lookup fee, and only then asks the core for a profile.
//!
//! # Modules
//!
//! - [`address`] — account address validation
//! - [`error`] — `GatewayError` enum
//! - [`network`] — network names, passphrases and response resolution
//! - [`payment`] — single-operation payment requests and receipts
//! - [`traits`] — `PaymentGateway` and `FeedbackLedger`
//! - [`simulated`] — in-memory ledger implementing both traits
//! - [`lease`] — lease, dispute and per-account tally ledger
//! - [`lookup`] — fee-gated lookup service with paid-view bookkeeping
//! - [`feedback`] — feedback submission validation and recording

pub mod address;
pub mod error;
pub mod feedback;
pub mod lease;
pub mod lookup;
pub mod network;
pub mod payment;
pub mod simulated;
pub mod traits;

pub use address::{is_valid_address, validate_address};
pub use error::GatewayError;
pub use feedback::{record_feedback, FeedbackRecord, FeedbackSubmission};
pub use lease::{Dispute, Lease, LeaseBook, LeaseLedger, LeaseReputation};
pub use lookup::{LookupOutcome, LookupService, PaidViews, RecentAddresses};
pub use network::{Network, NetworkDetails, NetworkInfo};
pub use payment::{PaymentBuilder, PaymentReceipt, PaymentRequest};
pub use simulated::SimulatedGateway;
pub use traits::{FeedbackLedger, PaymentGateway};
