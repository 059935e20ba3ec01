use std::{
    fmt::Debug,
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use reqwest::{
    header::{HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client as HttpClient,
};
use reqwest_middleware::{ClientBuilder as HttpClientBuilder, ClientWithMiddleware};
use reqwest_retry::RetryTransientMiddleware;
#[cfg(feature = "tracing")]
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::{RemoteError, RpcClientError},
    retry::RetryConfig,
    HeaderMap,
};

/// Default per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure reported while splitting a raw response body into a payload.
#[derive(Debug)]
pub enum ResponseError {
    /// The body carried an error payload from the remote node.
    Remote(RemoteError),
    /// The body did not match the chain family's wire envelope.
    Invalid {
        /// Description of the expected envelope shape
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },
}

/// A remote procedure exposed by a chain family's node API.
///
/// Implementations describe how an invocation is put on the wire and how a
/// raw response body splits into a success payload or a remote error. The
/// client core stays agnostic of the wire format.
pub trait RpcMethod: Debug + Send + Sync {
    /// Name of the remote procedure, for diagnostics.
    fn name(&self) -> &'static str;

    /// The URL to POST to. JSON-RPC families post to the base URL; path
    /// -per-method APIs join their path onto it.
    fn endpoint(&self, base: &Url) -> Result<Url, RpcClientError> {
        Ok(base.clone())
    }

    /// The serialized request body. `id` is a per-client monotonic request
    /// id; wire formats without request ids ignore it.
    fn request_body(&self, id: u64) -> Result<serde_json::Value, RpcClientError>;

    /// Splits a raw response body into the method's success payload or the
    /// remote error it carries.
    fn response_payload(body: &str) -> Result<serde_json::Value, ResponseError>;
}

/// Per-client transport configuration, fixed at construction.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// Retry policy for transient failures.
    pub retry: RetryConfig,
    /// Per-attempt request timeout; [`DEFAULT_TIMEOUT`] when `None`.
    pub timeout: Option<Duration>,
    /// Extra headers sent with every request (API keys and the like).
    pub extra_headers: Option<HeaderMap>,
}

/// A client for executing RPC methods against one remote node.
///
/// All state except the request id counter is read-only after construction,
/// so a client is safe for unlimited concurrent use.
#[derive(Debug)]
pub struct RpcClient<MethodT: RpcMethod> {
    url: Url,
    client: ClientWithMiddleware,
    next_id: AtomicU64,
    retry: RetryConfig,
    _phantom: PhantomData<MethodT>,
}

impl<MethodT: RpcMethod> RpcClient<MethodT> {
    /// Creates a new instance, given a remote node URL.
    ///
    /// Fails fast on a malformed URL; no network traffic happens here.
    pub fn new(url: &str, config: ClientConfig) -> Result<Self, RpcClientError> {
        let url: Url = url.parse()?;

        let retry_policy = config.retry.policy();

        let mut headers = config.extra_headers.unwrap_or_default();
        headers.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.append(
            USER_AGENT,
            HeaderValue::from_str(&format!("omni-sdk {}", env!("CARGO_PKG_VERSION")))
                .expect("Version string is valid header value"),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .expect("Default construction nor setting default headers can cause an error");

        #[cfg(feature = "tracing")]
        let client = HttpClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        #[cfg(not(feature = "tracing"))]
        let client = HttpClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            url,
            client,
            next_id: AtomicU64::new(0),
            retry: config.retry,
            _phantom: PhantomData,
        })
    }

    /// The bound endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(
        &self,
        endpoint: &Url,
        request_body: &serde_json::Value,
    ) -> Result<String, RpcClientError> {
        self.client
            .post(endpoint.clone())
            .body(request_body.to_string())
            .send()
            .await
            .map_err(|err| RpcClientError::FailedToSend(err.into()))?
            .error_for_status()
            .map_err(|err| RpcClientError::HttpStatus(err.into()))?
            .text()
            .await
            .map_err(|err| RpcClientError::CorruptedResponse(err.into()))
    }

    async fn send_and_extract_payload(
        &self,
        method: &MethodT,
    ) -> Result<serde_json::Value, RpcClientError> {
        let endpoint = method.endpoint(&self.url)?;
        let request_body = method.request_body(self.next_id.fetch_add(1, Ordering::Relaxed))?;

        let response = self.send_request_body(&endpoint, &request_body).await?;

        MethodT::response_payload(&response).map_err(|error| match error {
            ResponseError::Remote(error) => RpcClientError::RemoteError {
                error,
                method: method.name(),
            },
            ResponseError::Invalid {
                expected_type,
                error,
            } => RpcClientError::InvalidResponse {
                response,
                expected_type,
                error,
            },
        })
    }

    /// Calls the provided RPC method and returns the decoded result.
    ///
    /// Transport-level transient failures (connect, timeout, 5xx) are
    /// retried by the HTTP middleware. Transient errors delivered inside a
    /// well-formed response payload are re-sent here with the same budget;
    /// a single failure mode never draws on both. Permanent failures and
    /// decode mismatches return immediately.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn call<SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        let mut past_attempts = 0;
        let payload = loop {
            match self.send_and_extract_payload(&method).await {
                Ok(payload) => break payload,
                Err(RpcClientError::RemoteError { error, .. })
                    if error.is_transient() && past_attempts < self.retry.count =>
                {
                    log::debug!(
                        "transient remote error from '{}', re-sending: {error}",
                        method.name()
                    );
                    tokio::time::sleep(self.retry.delay_for(past_attempts)).await;
                    past_attempts += 1;
                }
                Err(error) => return Err(error),
            }
        };

        serde_json::from_value(payload.clone()).map_err(|error| RpcClientError::InvalidResponse {
            response: payload.to_string(),
            expected_type: std::any::type_name::<SuccessT>(),
            error,
        })
    }
}
