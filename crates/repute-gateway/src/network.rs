//! Network identification.
//!
//! Wallet bridges report the active network either as a bare name
//! (`"TESTNET"`) or as an object carrying a passphrase and/or a name.
//! [`NetworkInfo`] captures both shapes as one untagged enum and
//! [`NetworkInfo::resolve`] turns it into a single [`NetworkDetails`] once,
//! at the boundary, so nothing downstream inspects response shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Passphrase of the public test network.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Passphrase of the production network.
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Name reported when a passphrase matches no known network.
pub const UNKNOWN_NETWORK_NAME: &str = "UNKNOWN";

/// Known networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    /// Public test network. Lookups are only charged here.
    #[default]
    Testnet,
    /// Production network.
    Public,
}

impl Network {
    /// Wallet-facing name, e.g. `"TESTNET"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Testnet => "TESTNET",
            Self::Public => "PUBLIC",
        }
    }

    /// Network passphrase signed into every transaction.
    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Testnet => TESTNET_PASSPHRASE,
            Self::Public => PUBLIC_PASSPHRASE,
        }
    }

    /// Exact (case-sensitive) wallet name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TESTNET" => Some(Self::Testnet),
            "PUBLIC" => Some(Self::Public),
            _ => None,
        }
    }

    pub fn from_passphrase(passphrase: &str) -> Option<Self> {
        match passphrase {
            TESTNET_PASSPHRASE => Some(Self::Testnet),
            PUBLIC_PASSPHRASE => Some(Self::Public),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = GatewayError;

    /// Case-insensitive; accepts `mainnet` as an alias of `public`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "public" | "mainnet" => Ok(Self::Public),
            _ => Err(GatewayError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Network response from a wallet bridge, in either shape it may arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkInfo {
    /// Bare network name.
    Named(String),
    /// Object form. Either field may be missing.
    Detailed {
        #[serde(default)]
        network: Option<String>,
        #[serde(default, rename = "networkPassphrase")]
        network_passphrase: Option<String>,
    },
}

impl From<Network> for NetworkInfo {
    fn from(network: Network) -> Self {
        NetworkInfo::Detailed {
            network: Some(network.name().to_string()),
            network_passphrase: Some(network.passphrase().to_string()),
        }
    }
}

/// Resolved network name and passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDetails {
    pub name: String,
    pub passphrase: String,
}

impl NetworkDetails {
    /// Details of a known network.
    pub fn of(network: Network) -> Self {
        Self {
            name: network.name().to_string(),
            passphrase: network.passphrase().to_string(),
        }
    }

    /// The known network this name refers to, if any.
    pub fn network(&self) -> Option<Network> {
        Network::from_name(&self.name)
    }

    /// Fail unless these details name `expected`.
    pub fn require(&self, expected: Network) -> Result<(), GatewayError> {
        if self.network() == Some(expected) {
            Ok(())
        } else {
            Err(GatewayError::NetworkMismatch {
                expected: expected.name().to_string(),
                actual: self.name.clone(),
            })
        }
    }
}

impl NetworkInfo {
    /// Collapse the response into one name and passphrase.
    ///
    /// - A bare name maps to its passphrase when known.
    /// - In the object form the passphrase determines the name, and an
    ///   explicit `network` field overrides that name.
    /// - If no passphrase can be determined, both fall back to testnet.
    ///
    /// # Examples
    ///
    /// ```
    /// use repute_gateway::network::{NetworkInfo, PUBLIC_PASSPHRASE};
    ///
    /// let d = NetworkInfo::Named("PUBLIC".into()).resolve();
    /// assert_eq!(d.passphrase, PUBLIC_PASSPHRASE);
    ///
    /// let d = NetworkInfo::Named("FUTURENET".into()).resolve();
    /// assert_eq!(d.name, "TESTNET");
    /// ```
    pub fn resolve(&self) -> NetworkDetails {
        let (name, passphrase) = match self {
            NetworkInfo::Named(name) => {
                let passphrase = Network::from_name(name)
                    .map(|n| n.passphrase().to_string())
                    .unwrap_or_default();
                (name.clone(), passphrase)
            }
            NetworkInfo::Detailed {
                network,
                network_passphrase,
            } => {
                let passphrase = network_passphrase.clone().unwrap_or_default();
                let derived = Network::from_passphrase(&passphrase)
                    .map(|n| n.name().to_string())
                    .unwrap_or_else(|| UNKNOWN_NETWORK_NAME.to_string());
                (network.clone().unwrap_or(derived), passphrase)
            }
        };

        if passphrase.is_empty() {
            return NetworkDetails::of(Network::Testnet);
        }
        NetworkDetails { name, passphrase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_known_networks() {
        assert_eq!(
            NetworkInfo::Named("TESTNET".into()).resolve(),
            NetworkDetails::of(Network::Testnet)
        );
        assert_eq!(
            NetworkInfo::Named("PUBLIC".into()).resolve(),
            NetworkDetails::of(Network::Public)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_testnet() {
        let d = NetworkInfo::Named("FUTURENET".into()).resolve();
        assert_eq!(d, NetworkDetails::of(Network::Testnet));
    }

    #[test]
    fn passphrase_determines_name() {
        let info = NetworkInfo::Detailed {
            network: None,
            network_passphrase: Some(PUBLIC_PASSPHRASE.into()),
        };
        assert_eq!(info.resolve(), NetworkDetails::of(Network::Public));
    }

    #[test]
    fn explicit_name_overrides_passphrase() {
        let info = NetworkInfo::Detailed {
            network: Some("FUTURENET".into()),
            network_passphrase: Some("Test SDF Future Network ; October 2022".into()),
        };
        let d = info.resolve();
        assert_eq!(d.name, "FUTURENET");
        assert_eq!(d.network(), None);
        assert_eq!(
            d.require(Network::Testnet),
            Err(GatewayError::NetworkMismatch {
                expected: "TESTNET".into(),
                actual: "FUTURENET".into(),
            })
        );
    }

    #[test]
    fn unknown_passphrase_without_name() {
        let info = NetworkInfo::Detailed {
            network: None,
            network_passphrase: Some("Standalone Network ; February 2017".into()),
        };
        assert_eq!(info.resolve().name, UNKNOWN_NETWORK_NAME);
    }

    #[test]
    fn empty_object_falls_back_to_testnet() {
        let info = NetworkInfo::Detailed {
            network: Some("PUBLIC".into()),
            network_passphrase: None,
        };
        assert_eq!(info.resolve(), NetworkDetails::of(Network::Testnet));
    }

    #[test]
    fn deserializes_both_shapes() {
        let named: NetworkInfo = serde_json::from_str(r#""TESTNET""#).unwrap();
        assert_eq!(named, NetworkInfo::Named("TESTNET".into()));

        let detailed: NetworkInfo = serde_json::from_str(
            r#"{"network":"PUBLIC","networkPassphrase":"Public Global Stellar Network ; September 2015"}"#,
        )
        .unwrap();
        assert_eq!(detailed, NetworkInfo::from(Network::Public));

        let partial: NetworkInfo = serde_json::from_str(r#"{"network":"TESTNET"}"#).unwrap();
        assert_eq!(
            partial,
            NetworkInfo::Detailed {
                network: Some("TESTNET".into()),
                network_passphrase: None,
            }
        );
    }

    #[test]
    fn parse_network_names() {
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Public);
        assert_eq!(
            "devnet".parse::<Network>(),
            Err(GatewayError::UnknownNetwork("devnet".into()))
        );
    }
}
