use omni_chain::{ChainFamily, NetworkBinding};
use omni_rpc_client::RpcResult;
use omni_rpc_evm::{Block, BlockSpec, EvmRpcClient};

use crate::{config::SdkConfig, error::SdkError, sdk::ChainSpec};

/// Marker type selecting the Flare chain family at init:
/// `Sdk::<Flare>::init(config)`.
#[derive(Clone, Copy, Debug)]
pub struct Flare;

impl ChainSpec for Flare {
    type Rpc = EvmApi;

    const FAMILY: ChainFamily = ChainFamily::Evm;

    fn rpc(binding: &NetworkBinding, config: &SdkConfig) -> Result<Self::Rpc, SdkError> {
        let client = EvmRpcClient::new(binding.endpoint().as_str(), config.client_config())?;
        Ok(EvmApi { client })
    }
}

/// EVM method namespace of an [`crate::Sdk`] handle bound to a Flare-family
/// network.
///
/// Every method returns the [`RpcResult`] envelope; remote failures are
/// captured, never raised.
#[derive(Debug)]
pub struct EvmApi {
    client: EvmRpcClient,
}

impl EvmApi {
    /// The current block number.
    pub async fn block_number(&self) -> RpcResult<u64> {
        self.client.block_number().await.into()
    }

    /// The chain id reported by the node.
    pub async fn chain_id(&self) -> RpcResult<u64> {
        self.client.chain_id().await.into()
    }

    /// The current gas price in wei.
    pub async fn gas_price(&self) -> RpcResult<u128> {
        self.client.gas_price().await.into()
    }

    /// The balance of an address in wei, at the given block.
    pub async fn get_balance(
        &self,
        address: impl Into<String> + std::fmt::Debug,
        block: BlockSpec,
    ) -> RpcResult<u128> {
        self.client.get_balance(address, block).await.into()
    }

    /// A block by number; `None` for an unknown block.
    pub async fn get_block_by_number(
        &self,
        block: BlockSpec,
        full: bool,
    ) -> RpcResult<Option<Block>> {
        self.client.get_block_by_number(block, full).await.into()
    }

    /// A transaction by hash, opaque to the SDK; `None` for an unknown
    /// hash.
    pub async fn get_transaction_by_hash(
        &self,
        hash: impl Into<String> + std::fmt::Debug,
    ) -> RpcResult<Option<serde_json::Value>> {
        self.client.get_transaction_by_hash(hash).await.into()
    }

    /// The node's client version string.
    pub async fn client_version(&self) -> RpcResult<String> {
        self.client.client_version().await.into()
    }
}
