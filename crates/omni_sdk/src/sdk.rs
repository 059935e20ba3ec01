use omni_chain::{ChainFamily, Network, NetworkBinding};

use crate::{config::SdkConfig, error::SdkError};

/// Trait for chain families the SDK can bind to.
///
/// Implemented by the [`crate::Tron`] and [`crate::Flare`] marker types;
/// the associated `Rpc` type is the family's method namespace.
pub trait ChainSpec {
    /// The family's RPC method namespace.
    type Rpc: std::fmt::Debug;

    /// The wire-format family, checked against the configured network at
    /// init.
    const FAMILY: ChainFamily;

    /// Constructs the method namespace for a resolved binding.
    fn rpc(binding: &NetworkBinding, config: &SdkConfig) -> Result<Self::Rpc, SdkError>;
}

/// A ready-to-use SDK handle bound to one network.
#[derive(Debug)]
pub struct Sdk<ChainT: ChainSpec> {
    binding: NetworkBinding,
    rpc: ChainT::Rpc,
}

impl<ChainT: ChainSpec> Sdk<ChainT> {
    /// Creates a handle for the configured network.
    ///
    /// Fails fast on configuration problems: an unsupported network, a
    /// malformed endpoint override, or a network from the wrong chain
    /// family. No network traffic happens here.
    pub fn init(config: SdkConfig) -> Result<Self, SdkError> {
        let binding = match &config.endpoint {
            Some(endpoint) => NetworkBinding::with_endpoint(config.network, endpoint)?,
            None => NetworkBinding::new(config.network)?,
        };

        if binding.network().family() != ChainT::FAMILY {
            return Err(SdkError::FamilyMismatch {
                network: binding.network(),
                expected: ChainT::FAMILY,
            });
        }

        let rpc = ChainT::rpc(&binding, &config)?;

        log::debug!(
            "initialized SDK handle for '{}' against {}",
            binding.network(),
            binding.endpoint()
        );

        Ok(Self { binding, rpc })
    }

    /// The chain family's RPC method namespace.
    pub fn rpc(&self) -> &ChainT::Rpc {
        &self.rpc
    }

    /// The bound logical network.
    pub fn network(&self) -> Network {
        self.binding.network()
    }

    /// The resolved connection parameters.
    pub fn binding(&self) -> &NetworkBinding {
        &self.binding
    }
}
