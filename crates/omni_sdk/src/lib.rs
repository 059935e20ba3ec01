#![warn(missing_docs)]

//! Public SDK surface.
//!
//! An [`Sdk`] handle is created once per logical network via
//! [`Sdk::init`] and exposes a chain-family `rpc()` namespace whose methods
//! wrap the typed clients and return the [`RpcResult`] envelope: remote
//! failures are values to branch on, never propagating errors.
//!
//! ```no_run
//! use omni_chain::Network;
//! use omni_sdk::{Sdk, SdkConfig, Tron};
//!
//! # async fn example() {
//! let sdk = Sdk::<Tron>::init(SdkConfig::new(Network::TronShasta)).expect("network is served");
//! let block = sdk.rpc().get_now_block().await;
//! if block.is_success() {
//!     println!("head: {:?}", block.data());
//! }
//! # }
//! ```

mod config;
mod error;
mod evm;
mod sdk;
mod tron;

pub use omni_rpc_client::{Backoff, ErrorInfo, ErrorKind, RetryConfig, RpcResult, Status};

pub use self::{
    config::SdkConfig,
    error::SdkError,
    evm::{EvmApi, Flare},
    sdk::{ChainSpec, Sdk},
    tron::{Tron, TronApi},
};
