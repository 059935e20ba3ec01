use serde::Serialize;

use crate::error::RpcClientError;

/// Outcome of a single RPC invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The call succeeded and the envelope carries the decoded payload.
    Success,
    /// The call failed and the envelope carries the error description.
    Error,
}

/// Coarse failure classification used by the retry policy and surfaced to
/// callers through [`ErrorInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Bad or unsupported configuration, raised at init time.
    Configuration,
    /// A failure that may succeed on retry (connect/timeout/5xx-class).
    Transient,
    /// A failure that retrying cannot fix (validation/decode-class).
    Permanent,
}

/// Machine-readable description of a failed call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// The failure classification.
    pub kind: ErrorKind,
    /// The error code reported by the remote node, if any.
    pub code: Option<i64>,
    /// Human-readable error message.
    pub message: String,
}

impl From<&RpcClientError> for ErrorInfo {
    fn from(error: &RpcClientError) -> Self {
        Self {
            kind: error.kind(),
            code: error.remote_code(),
            message: error.to_string(),
        }
    }
}

/// Uniform success/error envelope returned by every SDK-surface call.
///
/// Exactly one of `data` and `error` is populated, matching `status`; the
/// constructors are the only way to build a value, so the invariant cannot
/// be violated from outside this module.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RpcResult<T> {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

impl<T> RpcResult<T> {
    /// Creates a success envelope carrying the decoded payload.
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Creates an error envelope carrying the failure description.
    pub fn failure(error: ErrorInfo) -> Self {
        Self {
            status: Status::Error,
            data: None,
            error: Some(error),
        }
    }

    /// The call outcome; callers branch on this instead of matching errors.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// The decoded payload, present iff the call succeeded.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// The failure description, present iff the call failed.
    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Consumes the envelope, returning the payload if the call succeeded.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Converts the envelope back into a `Result` for callers that prefer
    /// `?` over branching on [`Status`].
    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(self
                .error
                .expect("constructors populate the error when data is absent")),
        }
    }
}

impl<T> From<Result<T, RpcClientError>> for RpcResult<T> {
    fn from(result: Result<T, RpcClientError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(ErrorInfo::from(&error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_no_error() {
        let result = RpcResult::success(42u64);
        assert_eq!(result.status(), Status::Success);
        assert!(result.is_success());
        assert_eq!(result.data(), Some(&42));
        assert!(result.error().is_none());
        assert_eq!(result.into_result(), Ok(42));
    }

    #[test]
    fn error_envelope_has_no_data() {
        let info = ErrorInfo {
            kind: ErrorKind::Permanent,
            code: Some(-32602),
            message: "invalid params".to_string(),
        };

        let result = RpcResult::<u64>::failure(info.clone());
        assert_eq!(result.status(), Status::Error);
        assert!(!result.is_success());
        assert!(result.data().is_none());
        assert_eq!(result.error(), Some(&info));
        assert_eq!(result.into_result(), Err(info));
    }

    #[test]
    fn envelope_from_call_outcome() {
        let success = RpcResult::from(Ok::<_, RpcClientError>("payload"));
        assert!(success.is_success());

        let failure: Result<&str, _> = Err(RpcClientError::RemoteError {
            error: crate::RemoteError {
                code: Some(-32000),
                message: "insufficient funds".to_string(),
            },
            method: "eth_sendRawTransaction",
        });
        let failure = RpcResult::from(failure);
        assert_eq!(failure.status(), Status::Error);

        let error = failure.error().expect("error envelope");
        assert_eq!(error.kind, ErrorKind::Permanent);
        assert_eq!(error.code, Some(-32000));
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_value(RpcResult::success(1u8)).expect("serializes");
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["data"], 1);
        assert!(json.get("error").is_none());
    }
}
