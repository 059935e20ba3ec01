#![warn(missing_docs)]

//! Logical network registry.
//!
//! Maps a [`Network`] identifier to the connection parameters of a concrete
//! node endpoint. Resolution happens once at SDK init and fails fast;
//! a live [`NetworkBinding`] is immutable.

use serde::{Deserialize, Serialize};
use url::Url;

/// Wire-format family a network belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ChainFamily {
    /// Tron wallet HTTP API (path per method).
    Tron,
    /// Ethereum-style JSON-RPC 2.0.
    Evm,
}

impl std::fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tron => f.write_str("tron"),
            Self::Evm => f.write_str("evm"),
        }
    }
}

/// A logical blockchain network, chosen at init time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    /// Tron mainnet
    Tron,
    /// Tron Shasta testnet
    TronShasta,
    /// Flare mainnet
    Flare,
    /// Songbird canary network
    FlareSongbird,
    /// Coston testnet
    FlareCoston,
    /// Coston2 testnet
    FlareCoston2,
}

impl Network {
    /// The wire-format family of this network.
    pub fn family(self) -> ChainFamily {
        match self {
            Self::Tron | Self::TronShasta => ChainFamily::Tron,
            Self::Flare | Self::FlareSongbird | Self::FlareCoston | Self::FlareCoston2 => {
                ChainFamily::Evm
            }
        }
    }

    /// Whether this is a test network.
    pub fn is_testnet(self) -> bool {
        matches!(self, Self::TronShasta | Self::FlareCoston | Self::FlareCoston2)
    }

    /// The EVM chain id, where the family defines one.
    pub fn chain_id(self) -> Option<u64> {
        match self {
            Self::Tron | Self::TronShasta => None,
            Self::Flare => Some(14),
            Self::FlareSongbird => Some(19),
            Self::FlareCoston => Some(16),
            Self::FlareCoston2 => Some(114),
        }
    }

    /// The registered public endpoint, if the network is currently served.
    pub fn default_endpoint(self) -> Option<&'static str> {
        match self {
            Self::Tron => Some("https://api.trongrid.io"),
            Self::TronShasta => Some("https://api.shasta.trongrid.io"),
            Self::Flare => Some("https://flare-api.flare.network/ext/C/rpc"),
            // No public RPC is available for Songbird at the moment; init
            // against it fails fast instead of failing on the first call.
            Self::FlareSongbird => None,
            Self::FlareCoston => Some("https://coston-api.flare.network/ext/C/rpc"),
            Self::FlareCoston2 => Some("https://coston2-api.flare.network/ext/C/rpc"),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tron => "tron",
            Self::TronShasta => "tron-shasta",
            Self::Flare => "flare",
            Self::FlareSongbird => "flare-songbird",
            Self::FlareCoston => "flare-coston",
            Self::FlareCoston2 => "flare-coston2",
        };
        f.write_str(name)
    }
}

/// Configuration errors raised while resolving a network.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// The network has no registered endpoint.
    #[error("network '{0}' is not supported: no endpoint is registered for it")]
    UnsupportedNetwork(Network),

    /// The endpoint URL is malformed.
    #[error(transparent)]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Connection parameters resolved from a [`Network`].
///
/// Created once per SDK handle; all fields are private and there are no
/// mutators, so no component can redirect a live binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkBinding {
    network: Network,
    endpoint: Url,
    chain_id: Option<u64>,
    testnet: bool,
}

impl NetworkBinding {
    /// Resolves a network against the registry of public endpoints.
    pub fn new(network: Network) -> Result<Self, ChainError> {
        let endpoint = network
            .default_endpoint()
            .ok_or(ChainError::UnsupportedNetwork(network))?;
        Self::with_endpoint(network, endpoint)
    }

    /// Binds a network to a caller-provided endpoint, for self-hosted nodes
    /// and tests.
    pub fn with_endpoint(network: Network, endpoint: &str) -> Result<Self, ChainError> {
        Ok(Self {
            network,
            endpoint: endpoint.parse()?,
            chain_id: network.chain_id(),
            testnet: network.is_testnet(),
        })
    }

    /// The bound logical network.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The concrete node endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The EVM chain id, where the family defines one.
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Whether the bound network is a test network.
    pub fn is_testnet(&self) -> bool {
        self.testnet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_and_testnets() {
        assert_eq!(Network::Tron.family(), ChainFamily::Tron);
        assert_eq!(Network::FlareCoston2.family(), ChainFamily::Evm);

        assert!(!Network::Tron.is_testnet());
        assert!(Network::TronShasta.is_testnet());
        assert!(!Network::Flare.is_testnet());
        assert!(Network::FlareCoston.is_testnet());
    }

    #[test]
    fn flare_chain_ids_match_the_deployed_networks() {
        assert_eq!(Network::Flare.chain_id(), Some(14));
        assert_eq!(Network::FlareSongbird.chain_id(), Some(19));
        assert_eq!(Network::FlareCoston.chain_id(), Some(16));
        assert_eq!(Network::FlareCoston2.chain_id(), Some(114));
        assert_eq!(Network::Tron.chain_id(), None);
    }

    #[test]
    fn resolving_a_served_network_binds_its_endpoint() {
        let binding = NetworkBinding::new(Network::TronShasta).expect("shasta is served");
        assert_eq!(binding.network(), Network::TronShasta);
        assert_eq!(binding.endpoint().as_str(), "https://api.shasta.trongrid.io/");
        assert!(binding.is_testnet());
        assert_eq!(binding.chain_id(), None);
    }

    #[test]
    fn unserved_network_fails_fast() {
        let error = NetworkBinding::new(Network::FlareSongbird)
            .expect_err("songbird has no registered endpoint");
        assert!(matches!(error, ChainError::UnsupportedNetwork(Network::FlareSongbird)));
    }

    #[test]
    fn malformed_custom_endpoint_is_rejected() {
        let error = NetworkBinding::with_endpoint(Network::Tron, "not a url")
            .expect_err("endpoint should not parse");
        assert!(matches!(error, ChainError::InvalidEndpoint(_)));
    }

    #[test]
    fn network_names_round_trip_through_serde() {
        let json = serde_json::to_string(&Network::FlareCoston2).expect("serializes");
        assert_eq!(json, "\"flare-coston2\"");
        let network: Network = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(network, Network::FlareCoston2);
    }
}
