//! CLI configuration loaded from environment variables.

use std::time::Duration;

use anyhow::{Context, Result};
use repute_gateway::payment::STROOPS_PER_XLM;
use repute_gateway::Network;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Network the simulated wallet reports.
    pub network: Network,
    /// Artificial delay per ledger call.
    pub latency: Duration,
    /// Accounts funded before any command runs.
    pub funded_accounts: Vec<String>,
    /// Balance given to each funded account, in stroops.
    pub starting_balance_stroops: u64,
    /// Fund the viewer of a lookup automatically.
    pub auto_fund_viewer: bool,
    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            latency: Duration::from_millis(800),
            funded_accounts: Vec::new(),
            starting_balance_stroops: 100 * STROOPS_PER_XLM,
            auto_fund_viewer: true,
            log_json: false,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let network = match var("REPUTE_NETWORK") {
            Some(v) => v
                .parse::<Network>()
                .context("REPUTE_NETWORK must be 'testnet' or 'public'")?,
            None => defaults.network,
        };

        let latency = match var("REPUTE_LATENCY_MS") {
            Some(v) => Duration::from_millis(
                v.parse()
                    .context("REPUTE_LATENCY_MS must be a non-negative integer")?,
            ),
            None => defaults.latency,
        };

        let funded_accounts = var("REPUTE_FUNDED_ACCOUNTS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let starting_balance_stroops = match var("REPUTE_STARTING_BALANCE_XLM") {
            Some(v) => {
                let xlm: u64 = v
                    .parse()
                    .context("REPUTE_STARTING_BALANCE_XLM must be a positive integer")?;
                xlm.checked_mul(STROOPS_PER_XLM)
                    .context("REPUTE_STARTING_BALANCE_XLM overflow")?
            }
            None => defaults.starting_balance_stroops,
        };

        let auto_fund_viewer = match var("REPUTE_AUTO_FUND") {
            Some(v) => parse_bool(&v).context("REPUTE_AUTO_FUND must be a boolean")?,
            None => defaults.auto_fund_viewer,
        };

        let log_json = match var("REPUTE_LOG_JSON") {
            Some(v) => parse_bool(&v).context("REPUTE_LOG_JSON must be a boolean")?,
            None => defaults.log_json,
        };

        Ok(Config {
            network,
            latency,
            funded_accounts,
            starting_balance_stroops,
            auto_fund_viewer,
            log_json,
        })
    }
}
