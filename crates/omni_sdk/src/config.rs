use std::time::Duration;

use omni_chain::Network;
use omni_rpc_client::{ClientConfig, RetryConfig};

/// Configuration for an [`crate::Sdk`] handle.
///
/// Everything is explicit and fixed at init; there is no process-wide
/// state. Only the network is mandatory.
#[derive(Clone, Debug)]
pub struct SdkConfig {
    /// The logical network to bind to.
    pub network: Network,
    /// Endpoint override for self-hosted nodes and tests; the registry's
    /// public endpoint is used when absent.
    pub endpoint: Option<String>,
    /// Retry policy for transient failures. Defaults to no retries.
    pub retry: RetryConfig,
    /// Per-attempt request timeout; the client default (30s) when absent.
    pub timeout: Option<Duration>,
}

impl SdkConfig {
    /// Creates a config for the given network with default retry and
    /// timeout settings.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            endpoint: None,
            retry: RetryConfig::default(),
            timeout: None,
        }
    }

    /// Overrides the node endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets a fixed-delay retry policy.
    #[must_use]
    pub fn with_retry(mut self, count: u32, delay: Duration) -> Self {
        self.retry = RetryConfig::new(count, delay);
        self
    }

    /// Replaces the full retry policy.
    #[must_use]
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the per-attempt request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            retry: self.retry,
            timeout: self.timeout,
            extra_headers: None,
        }
    }
}
