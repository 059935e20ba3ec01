#![warn(missing_docs)]

//! JSON-RPC 2.0 method set and client for the Flare family of EVM networks.

mod block;
mod client;
/// Types specific to the JSON-RPC 2.0 envelope
pub mod jsonrpc;
mod quantity;
mod request_methods;

pub use self::{
    block::Block,
    client::EvmRpcClient,
    quantity::Quantity,
    request_methods::{BlockSpec, RequestMethod},
};
