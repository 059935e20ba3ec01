use omni_chain::{ChainFamily, NetworkBinding};
use omni_rpc_client::RpcResult;
use omni_rpc_tron::{
    AccountBalance, AccountIdentifier, Block, BlockIdentifier, ChainParameters, Transaction,
    TronRpcClient,
};

use crate::{config::SdkConfig, error::SdkError, sdk::ChainSpec};

/// Marker type selecting the Tron chain family at init:
/// `Sdk::<Tron>::init(config)`.
#[derive(Clone, Copy, Debug)]
pub struct Tron;

impl ChainSpec for Tron {
    type Rpc = TronApi;

    const FAMILY: ChainFamily = ChainFamily::Tron;

    fn rpc(binding: &NetworkBinding, config: &SdkConfig) -> Result<Self::Rpc, SdkError> {
        let client = TronRpcClient::new(binding.endpoint().as_str(), config.client_config())?;
        Ok(TronApi { client })
    }
}

/// Tron method namespace of an [`crate::Sdk`] handle.
///
/// Every method returns the [`RpcResult`] envelope; remote failures are
/// captured, never raised.
#[derive(Debug)]
pub struct TronApi {
    client: TronRpcClient,
}

impl TronApi {
    /// The head block of the chain.
    pub async fn get_now_block(&self) -> RpcResult<Block> {
        self.client.get_now_block().await.into()
    }

    /// A block by height (decimal string) or hash, with transaction data.
    pub async fn get_block(&self, id_or_num: impl Into<String> + std::fmt::Debug) -> RpcResult<Block> {
        self.client.get_block(id_or_num).await.into()
    }

    /// The committee-governed chain parameters.
    pub async fn get_chain_parameters(&self) -> RpcResult<ChainParameters> {
        self.client.get_chain_parameters().await.into()
    }

    /// A transaction by id.
    pub async fn get_transaction_by_id(
        &self,
        id: impl Into<String> + std::fmt::Debug,
    ) -> RpcResult<Transaction> {
        self.client.get_transaction_by_id(id).await.into()
    }

    /// The balance of an account as of a specific historical block.
    pub async fn get_account_balance(
        &self,
        account_identifier: AccountIdentifier,
        block_identifier: BlockIdentifier,
        visible: bool,
    ) -> RpcResult<AccountBalance> {
        self.client
            .get_account_balance(account_identifier, block_identifier, visible)
            .await
            .into()
    }
}
