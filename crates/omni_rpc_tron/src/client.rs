use omni_rpc_client::{ClientConfig, RpcClient, RpcClientError};

use crate::{
    account::{AccountBalance, AccountIdentifier, BlockIdentifier},
    block::Block,
    chain_parameters::ChainParameters,
    request_methods::RequestMethod,
    transaction::Transaction,
};

/// A client for executing wallet-API methods on a remote Tron node.
#[derive(Debug)]
pub struct TronRpcClient {
    inner: RpcClient<RequestMethod>,
}

impl TronRpcClient {
    /// Creates a new instance, given a remote node URL.
    pub fn new(url: &str, config: ClientConfig) -> Result<Self, RpcClientError> {
        let inner = RpcClient::new(url, config)?;
        Ok(Self { inner })
    }

    /// Calls `wallet/getnowblock` and returns the head block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_now_block(&self) -> Result<Block, RpcClientError> {
        self.inner.call(RequestMethod::GetNowBlock).await
    }

    /// Calls `wallet/getblock` with a block height (decimal string) or
    /// block hash, including transaction data.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block(&self, id_or_num: impl Into<String> + std::fmt::Debug) -> Result<Block, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlock {
                id_or_num: id_or_num.into(),
                detail: true,
            })
            .await
    }

    /// Calls `wallet/getchainparameters`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_chain_parameters(&self) -> Result<ChainParameters, RpcClientError> {
        self.inner.call(RequestMethod::GetChainParameters).await
    }

    /// Calls `wallet/gettransactionbyid`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_id(
        &self,
        id: impl Into<String> + std::fmt::Debug,
    ) -> Result<Transaction, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionById {
                value: id.into(),
                visible: false,
            })
            .await
    }

    /// Calls `wallet/getaccountbalance`: the balance of an account as of a
    /// specific historical block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_account_balance(
        &self,
        account_identifier: AccountIdentifier,
        block_identifier: BlockIdentifier,
        visible: bool,
    ) -> Result<AccountBalance, RpcClientError> {
        self.inner
            .call(RequestMethod::GetAccountBalance {
                account_identifier,
                block_identifier,
                visible,
            })
            .await
    }
}
