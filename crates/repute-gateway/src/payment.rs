//! Single-operation payment requests.
//!
//! Every paid lookup sends the same transaction: one native-asset payment
//! from the viewer to the platform fee account, with a text memo and a
//! bounded validity window. [`PaymentBuilder`] validates the pieces and
//! produces an unsigned [`PaymentRequest`]; a [`PaymentGateway`] signs and
//! submits it and hands back a [`PaymentReceipt`].
//!
//! Amounts are in stroops (1 XLM = 10^7 stroops).
//!
//! [`PaymentGateway`]: crate::traits::PaymentGateway

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::address::validate_address;
use crate::error::GatewayError;
use crate::network::Network;

/// Stroops per XLM.
pub const STROOPS_PER_XLM: u64 = 10_000_000;

/// Account that receives every lookup fee.
pub const PLATFORM_FEE_ADDRESS: &str = "GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2";

/// Fee charged per reputation lookup: 0.5 XLM.
pub const LOOKUP_FEE_STROOPS: u64 = STROOPS_PER_XLM / 2;

/// Ledger base fee per operation in stroops.
pub const BASE_FEE_STROOPS: u32 = 100;

/// Memo attached to fee payments.
pub const PLATFORM_FEE_MEMO: &str = "Platform Fee Payment";

/// Text memos are limited to this many bytes.
pub const MAX_MEMO_BYTES: usize = 28;

/// Seconds a built transaction stays valid.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Render stroops as an XLM decimal without trailing zeros.
///
/// # Examples
///
/// ```
/// use repute_gateway::payment::format_xlm;
///
/// assert_eq!(format_xlm(5_000_000), "0.5");
/// assert_eq!(format_xlm(120_000_000), "12");
/// assert_eq!(format_xlm(1), "0.0000001");
/// ```
pub fn format_xlm(stroops: u64) -> String {
    let whole = stroops / STROOPS_PER_XLM;
    let frac = stroops % STROOPS_PER_XLM;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:07}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// An unsigned single-payment transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub source: String,
    pub destination: String,
    pub amount_stroops: u64,
    pub fee_stroops: u32,
    pub memo: String,
    pub timeout_secs: u64,
    pub network_passphrase: String,
}

impl PaymentRequest {
    /// The lookup-fee payment from `source` to [`PLATFORM_FEE_ADDRESS`].
    pub fn platform_fee(source: &str, network: Network) -> Result<Self, GatewayError> {
        PaymentBuilder::new(network)
            .source(source)
            .destination(PLATFORM_FEE_ADDRESS)
            .amount(LOOKUP_FEE_STROOPS)
            .memo(PLATFORM_FEE_MEMO)
            .build()
    }

    /// Amount plus fee: what the source account must hold.
    pub fn total_cost(&self) -> u64 {
        self.amount_stroops.saturating_add(self.fee_stroops as u64)
    }

    /// Canonical byte encoding signed and hashed by gateways.
    pub fn envelope_bytes(&self) -> Vec<u8> {
        fn field(buf: &mut Vec<u8>, bytes: &[u8]) {
            buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
            buf.extend_from_slice(bytes);
        }

        let mut buf = Vec::with_capacity(256);
        field(&mut buf, self.network_passphrase.as_bytes());
        field(&mut buf, self.source.as_bytes());
        field(&mut buf, self.destination.as_bytes());
        field(&mut buf, &self.amount_stroops.to_be_bytes());
        field(&mut buf, &self.fee_stroops.to_be_bytes());
        field(&mut buf, self.memo.as_bytes());
        field(&mut buf, &self.timeout_secs.to_be_bytes());
        buf
    }
}

/// Hash of a submitted transaction: SHA-256 of the envelope and the
/// submitter's sequence number, as 64 lowercase hex characters.
pub fn transaction_hash(envelope: &[u8], sequence: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(envelope);
    hasher.update(sequence.to_be_bytes());
    hex::encode(hasher.finalize())
}

/// Builder for [`PaymentRequest`].
///
/// # Example
/// ```
/// use repute_gateway::{Network, PaymentBuilder};
///
/// let req = PaymentBuilder::new(Network::Testnet)
///     .source("GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H")
///     .destination("GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2")
///     .amount(10_000_000)
///     .build()
///     .unwrap();
/// assert_eq!(req.fee_stroops, 100);
/// ```
#[derive(Debug, Clone)]
pub struct PaymentBuilder {
    network: Network,
    source: String,
    destination: String,
    amount_stroops: u64,
    fee_stroops: u32,
    memo: String,
    timeout_secs: u64,
}

impl PaymentBuilder {
    /// Start a payment on `network` with the default fee and timeout.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            source: String::new(),
            destination: String::new(),
            amount_stroops: 0,
            fee_stroops: BASE_FEE_STROOPS,
            memo: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn source(&mut self, address: &str) -> &mut Self {
        self.source = address.to_string();
        self
    }

    pub fn destination(&mut self, address: &str) -> &mut Self {
        self.destination = address.to_string();
        self
    }

    pub fn amount(&mut self, stroops: u64) -> &mut Self {
        self.amount_stroops = stroops;
        self
    }

    /// Override the base fee (default: [`BASE_FEE_STROOPS`]).
    pub fn fee(&mut self, stroops: u32) -> &mut Self {
        self.fee_stroops = stroops;
        self
    }

    pub fn memo(&mut self, text: &str) -> &mut Self {
        self.memo = text.to_string();
        self
    }

    /// Override the validity window (default: [`DEFAULT_TIMEOUT_SECS`]).
    pub fn timeout(&mut self, secs: u64) -> &mut Self {
        self.timeout_secs = secs;
        self
    }

    /// Validate and produce the unsigned request.
    pub fn build(&self) -> Result<PaymentRequest, GatewayError> {
        validate_address(&self.source)?;
        validate_address(&self.destination)?;
        if self.amount_stroops == 0 {
            return Err(GatewayError::InvalidAmount("amount is zero".into()));
        }
        if self.memo.len() > MAX_MEMO_BYTES {
            return Err(GatewayError::InvalidMemo(format!(
                "{} bytes exceeds {MAX_MEMO_BYTES}",
                self.memo.len()
            )));
        }

        Ok(PaymentRequest {
            source: self.source.clone(),
            destination: self.destination.clone(),
            amount_stroops: self.amount_stroops,
            fee_stroops: self.fee_stroops,
            memo: self.memo.clone(),
            timeout_secs: self.timeout_secs,
            network_passphrase: self.network.passphrase().to_string(),
        })
    }
}

/// Proof that a payment was accepted by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// 64 lowercase hex characters.
    pub tx_hash: String,
    pub source: String,
    pub destination: String,
    pub amount_stroops: u64,
    pub fee_stroops: u32,
    pub submitted_at: DateTime<Utc>,
}

impl PaymentReceipt {
    /// First eight characters of the hash, for display.
    pub fn short_hash(&self) -> &str {
        match self.tx_hash.char_indices().nth(8) {
            Some((end, _)) => &self.tx_hash[..end],
            None => &self.tx_hash,
        }
    }
}
