use serde::{Deserialize, Serialize};

use crate::envelope::ErrorKind;

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The message could not be sent to the remote node
    #[error(transparent)]
    FailedToSend(MiddlewareError),

    /// The remote node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(ReqwestError),

    /// The server returned an error code.
    #[error("The HTTP server returned error status code: {0}")]
    HttpStatus(ReqwestError),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned a response that does not match the expected shape.
    #[error("Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'")]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The remote node reported an error inside a well-formed response.
    #[error("Remote node returned an error for '{method}': {error}")]
    RemoteError {
        /// The error payload reported by the node
        error: RemoteError,
        /// The name of the invoked method
        method: &'static str,
    },
}

impl RpcClientError {
    /// Classifies the error per the retry taxonomy.
    ///
    /// Transient failures may succeed on retry; permanent failures return
    /// immediately without consuming retry budget; configuration errors are
    /// only raised while constructing a client.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FailedToSend(_) | Self::CorruptedResponse(_) => ErrorKind::Transient,
            Self::HttpStatus(error) => {
                if error.0.status().is_some_and(|status| status.is_server_error()) {
                    ErrorKind::Transient
                } else {
                    ErrorKind::Permanent
                }
            }
            Self::InvalidJsonRequest(_) | Self::InvalidResponse { .. } => ErrorKind::Permanent,
            Self::InvalidUrl(_) => ErrorKind::Configuration,
            Self::RemoteError { error, .. } => {
                if error.is_transient() {
                    ErrorKind::Transient
                } else {
                    ErrorKind::Permanent
                }
            }
        }
    }

    /// The error code reported by the remote node, if any.
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            Self::RemoteError { error, .. } => error.code,
            _ => None,
        }
    }
}

/// An error payload reported by the remote node inside a well-formed
/// response, independent of the chain family's wire format.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
#[error("{message}{}", .code.map_or_else(String::new, |code| format!(" (code: {code})")))]
pub struct RemoteError {
    /// The error code, where the wire format carries one (JSON-RPC does,
    /// Tron's wallet API does not).
    pub code: Option<i64>,
    /// The error message
    pub message: String,
}

// JSON-RPC internal error and the rate-limit code some providers use.
const TRANSIENT_REMOTE_CODES: [i64; 2] = [-32603, -32005];

impl RemoteError {
    /// Whether a retry can plausibly change the outcome.
    ///
    /// Validation errors are permanent; overload and internal-error
    /// responses are the 5xx-equivalents of the payload layer.
    pub fn is_transient(&self) -> bool {
        if self.code.is_some_and(|code| TRANSIENT_REMOTE_CODES.contains(&code)) {
            return true;
        }

        let message = self.message.to_lowercase();
        message.contains("timeout")
            || message.contains("timed out")
            || message.contains("busy")
            || message.contains("try again")
            || message.contains("rate limit")
    }
}

/// Wrapper for `reqwest::Error` that strips the request URL from the error,
/// as endpoint URLs may embed API keys.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ReqwestError(pub(crate) reqwest::Error);

impl From<reqwest::Error> for ReqwestError {
    fn from(error: reqwest::Error) -> Self {
        Self(error.without_url())
    }
}

impl From<ReqwestError> for reqwest::Error {
    fn from(error: ReqwestError) -> Self {
        error.0
    }
}

/// Wrapper for `reqwest_middleware::Error` with the same URL stripping as
/// [`ReqwestError`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct MiddlewareError(reqwest_middleware::Error);

impl From<reqwest_middleware::Error> for MiddlewareError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Reqwest(error) => {
                Self(reqwest_middleware::Error::Reqwest(error.without_url()))
            }
            other => Self(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(code: Option<i64>, message: &str) -> RemoteError {
        RemoteError {
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn remote_error_classification() {
        assert!(remote(Some(-32603), "internal error").is_transient());
        assert!(remote(Some(-32005), "limit exceeded").is_transient());
        assert!(remote(None, "server busy, try again later").is_transient());
        assert!(remote(None, "request timed out").is_transient());

        assert!(!remote(Some(-32602), "invalid params").is_transient());
        assert!(!remote(Some(-32601), "method not found").is_transient());
        assert!(!remote(None, "invalid address").is_transient());
    }

    #[test]
    fn remote_error_kind_follows_classification() {
        let transient = RpcClientError::RemoteError {
            error: remote(Some(-32603), "internal error"),
            method: "eth_blockNumber",
        };
        assert_eq!(transient.kind(), ErrorKind::Transient);

        let permanent = RpcClientError::RemoteError {
            error: remote(Some(-32602), "invalid params"),
            method: "eth_getBalance",
        };
        assert_eq!(permanent.kind(), ErrorKind::Permanent);
        assert_eq!(permanent.remote_code(), Some(-32602));
    }

    #[test]
    fn invalid_url_is_a_configuration_error() {
        let error = "not a url"
            .parse::<url::Url>()
            .map_err(RpcClientError::from)
            .expect_err("parse should fail");
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
