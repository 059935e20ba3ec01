#![warn(missing_docs)]

//! Tron wallet-API method set and client.
//!
//! Tron nodes expose an HTTP API with one POST path per procedure under
//! `wallet/`, JSON bodies in both directions, and errors reported as
//! HTTP 200 bodies shaped `{"Error": "..."}`.

mod account;
mod block;
mod chain_parameters;
mod client;
mod request_methods;
mod transaction;

pub use self::{
    account::{AccountBalance, AccountIdentifier, BlockIdentifier},
    block::{Block, BlockHeader, RawBlockHeader},
    chain_parameters::{ChainParameter, ChainParameters},
    client::TronRpcClient,
    request_methods::RequestMethod,
    transaction::Transaction,
};
