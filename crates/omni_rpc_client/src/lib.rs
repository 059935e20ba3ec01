#![warn(missing_docs)]

//! Resilient RPC client core shared by the chain-family crates.
//!
//! The client issues one remote procedure call at a time against a bound
//! endpoint, classifies failures as transient or permanent, and retries
//! transient ones according to a caller-supplied [`RetryConfig`]. Callers
//! above the SDK facade consume every outcome as an [`RpcResult`] envelope
//! instead of a propagating error.

mod client;
mod envelope;
mod error;
mod retry;

pub use reqwest::header::{self, HeaderMap, HeaderValue};

pub use self::{
    client::{ClientConfig, ResponseError, RpcClient, RpcMethod, DEFAULT_TIMEOUT},
    envelope::{ErrorInfo, ErrorKind, RpcResult, Status},
    error::{MiddlewareError, RemoteError, ReqwestError, RpcClientError},
    retry::{Backoff, RetryConfig},
};
