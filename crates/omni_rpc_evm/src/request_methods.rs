use omni_rpc_client::{ResponseError, RpcClientError, RpcMethod};
use serde::Serialize;
use serde_json::json;

use crate::jsonrpc;

/// Block selector for methods that read at a specific block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSpec {
    /// A block height.
    Number(u64),
    /// The most recent block.
    Latest,
    /// The genesis block.
    Earliest,
    /// The pending block.
    Pending,
}

impl std::fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "0x{number:x}"),
            Self::Latest => f.write_str("latest"),
            Self::Earliest => f.write_str("earliest"),
            Self::Pending => f.write_str("pending"),
        }
    }
}

impl Serialize for BlockSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Method invocations supported by the Flare-family JSON-RPC API.
///
/// Addresses and hashes stay opaque strings and are forwarded to the node
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestMethod {
    /// `eth_blockNumber`
    BlockNumber,
    /// `eth_chainId`
    ChainId,
    /// `eth_gasPrice`
    GasPrice,
    /// `eth_getBalance`
    GetBalance(String, BlockSpec),
    /// `eth_getBlockByNumber`
    GetBlockByNumber(BlockSpec, bool),
    /// `eth_getTransactionByHash`
    GetTransactionByHash(String),
    /// `web3_clientVersion`
    ClientVersion,
}

impl RequestMethod {
    fn method_name(&self) -> &'static str {
        match self {
            Self::BlockNumber => "eth_blockNumber",
            Self::ChainId => "eth_chainId",
            Self::GasPrice => "eth_gasPrice",
            Self::GetBalance(..) => "eth_getBalance",
            Self::GetBlockByNumber(..) => "eth_getBlockByNumber",
            Self::GetTransactionByHash(..) => "eth_getTransactionByHash",
            Self::ClientVersion => "web3_clientVersion",
        }
    }

    fn params(&self) -> Vec<serde_json::Value> {
        match self {
            Self::BlockNumber | Self::ChainId | Self::GasPrice | Self::ClientVersion => vec![],
            Self::GetBalance(address, block) => vec![json!(address), json!(block)],
            Self::GetBlockByNumber(block, full) => vec![json!(block), json!(full)],
            Self::GetTransactionByHash(hash) => vec![json!(hash)],
        }
    }
}

impl RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        self.method_name()
    }

    fn request_body(&self, id: u64) -> Result<serde_json::Value, RpcClientError> {
        let request = jsonrpc::Request {
            jsonrpc: jsonrpc::Version::V2_0,
            id: jsonrpc::Id::Num(id),
            method: self.method_name(),
            params: self.params(),
        };

        serde_json::to_value(&request).map_err(RpcClientError::InvalidJsonRequest)
    }

    fn response_payload(body: &str) -> Result<serde_json::Value, ResponseError> {
        let response: jsonrpc::Response<serde_json::Value> =
            serde_json::from_str(body).map_err(|error| ResponseError::Invalid {
                expected_type: "JSON-RPC 2.0 response",
                error,
            })?;

        response
            .data
            .into_result()
            .map_err(|error| ResponseError::Remote(error.into()))
    }
}
