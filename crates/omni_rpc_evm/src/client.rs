use omni_rpc_client::{ClientConfig, RpcClient, RpcClientError};

use crate::{
    block::Block,
    quantity::Quantity,
    request_methods::{BlockSpec, RequestMethod},
};

/// A client for executing JSON-RPC methods on a remote Flare-family node.
#[derive(Debug)]
pub struct EvmRpcClient {
    inner: RpcClient<RequestMethod>,
}

impl EvmRpcClient {
    /// Creates a new instance, given a remote node URL.
    pub fn new(url: &str, config: ClientConfig) -> Result<Self, RpcClientError> {
        let inner = RpcClient::new(url, config)?;
        Ok(Self { inner })
    }

    /// Calls `eth_blockNumber` and returns the block number.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        self.inner
            .call::<Quantity>(RequestMethod::BlockNumber)
            .await
            .map(Quantity::as_u64)
    }

    /// Calls `eth_chainId` and returns the chain ID.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn chain_id(&self) -> Result<u64, RpcClientError> {
        self.inner
            .call::<Quantity>(RequestMethod::ChainId)
            .await
            .map(Quantity::as_u64)
    }

    /// Calls `eth_gasPrice` and returns the price in wei.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn gas_price(&self) -> Result<u128, RpcClientError> {
        self.inner
            .call::<Quantity>(RequestMethod::GasPrice)
            .await
            .map(|price| price.0)
    }

    /// Calls `eth_getBalance` and returns the balance in wei.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_balance(
        &self,
        address: impl Into<String> + std::fmt::Debug,
        block: BlockSpec,
    ) -> Result<u128, RpcClientError> {
        self.inner
            .call::<Quantity>(RequestMethod::GetBalance(address.into(), block))
            .await
            .map(|balance| balance.0)
    }

    /// Calls `eth_getBlockByNumber`. `full` selects full transaction
    /// objects over hashes. Returns `None` for an unknown block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number(
        &self,
        block: BlockSpec,
        full: bool,
    ) -> Result<Option<Block>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByNumber(block, full))
            .await
    }

    /// Calls `eth_getTransactionByHash`. The transaction shape is opaque to
    /// the SDK; `None` for an unknown hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_hash(
        &self,
        hash: impl Into<String> + std::fmt::Debug,
    ) -> Result<Option<serde_json::Value>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionByHash(hash.into()))
            .await
    }

    /// Calls `web3_clientVersion`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn client_version(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::ClientVersion).await
    }
}
