use omni_rpc_client::{RemoteError, ResponseError, RpcClientError, RpcMethod};
use serde_json::json;
use url::Url;

use crate::account::{AccountIdentifier, BlockIdentifier};

/// Method invocations supported by the Tron wallet API.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestMethod {
    /// `wallet/getnowblock`
    GetNowBlock,
    /// `wallet/getblock`
    GetBlock {
        /// Block height (decimal string) or block hash.
        id_or_num: String,
        /// Whether to include transaction data.
        detail: bool,
    },
    /// `wallet/getchainparameters`
    GetChainParameters,
    /// `wallet/gettransactionbyid`
    GetTransactionById {
        /// The transaction id.
        value: String,
        /// Whether addresses in the response use base58check.
        visible: bool,
    },
    /// `wallet/getaccountbalance`
    GetAccountBalance {
        /// The queried account.
        account_identifier: AccountIdentifier,
        /// The historical block to read the balance at.
        block_identifier: BlockIdentifier,
        /// Whether addresses use base58check.
        visible: bool,
    },
}

impl RequestMethod {
    fn path(&self) -> &'static str {
        match self {
            Self::GetNowBlock => "wallet/getnowblock",
            Self::GetBlock { .. } => "wallet/getblock",
            Self::GetChainParameters => "wallet/getchainparameters",
            Self::GetTransactionById { .. } => "wallet/gettransactionbyid",
            Self::GetAccountBalance { .. } => "wallet/getaccountbalance",
        }
    }
}

impl RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        self.path()
    }

    fn endpoint(&self, base: &Url) -> Result<Url, RpcClientError> {
        base.join(self.path()).map_err(RpcClientError::InvalidUrl)
    }

    // The wallet API has no request ids.
    fn request_body(&self, _id: u64) -> Result<serde_json::Value, RpcClientError> {
        let body = match self {
            Self::GetNowBlock | Self::GetChainParameters => json!({}),
            Self::GetBlock { id_or_num, detail } => json!({
                "id_or_num": id_or_num,
                "detail": detail,
            }),
            Self::GetTransactionById { value, visible } => json!({
                "value": value,
                "visible": visible,
            }),
            Self::GetAccountBalance {
                account_identifier,
                block_identifier,
                visible,
            } => json!({
                "account_identifier": account_identifier,
                "block_identifier": block_identifier,
                "visible": visible,
            }),
        };
        Ok(body)
    }

    fn response_payload(body: &str) -> Result<serde_json::Value, ResponseError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|error| ResponseError::Invalid {
                expected_type: "Tron wallet API response",
                error,
            })?;

        // Node-side failures come back as HTTP 200 with an `Error` body.
        if let Some(message) = value.get("Error").and_then(serde_json::Value::as_str) {
            return Err(ResponseError::Remote(RemoteError {
                code: None,
                message: message.to_string(),
            }));
        }

        Ok(value)
    }
}
