use omni_rpc_client::RemoteError;
use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// Version 2.0
    V2_0,
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("2.0")
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let version = String::deserialize(deserializer)?;
        if version == "2.0" {
            Ok(Self::V2_0)
        } else {
            Err(serde::de::Error::custom(format!(
                "unsupported JSON-RPC version: {version}"
            )))
        }
    }
}

/// JSON-RPC request id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric id
    Num(u64),
    /// String id
    Str(String),
}

/// A JSON-RPC 2.0 request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Request<'a, ParamsT: Serialize> {
    /// JSON-RPC version
    pub jsonrpc: Version,
    /// The request id
    pub id: Id,
    /// The method name
    pub method: &'a str,
    /// The ordered method parameters
    pub params: ParamsT,
}

/// A JSON-RPC 2.0 response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Response<T> {
    /// JSON-RPC version
    pub jsonrpc: Version,
    /// The id of the request this responds to
    pub id: Id,
    /// The response payload
    #[serde(flatten)]
    pub data: ResponseData<T>,
}

/// Success or error payload of a [`Response`].
///
/// The error variant comes first so that a malformed body carrying both
/// keys resolves to the error.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// The node reported an error.
    Error {
        /// The error payload
        error: Error,
    },
    /// The call succeeded.
    Success {
        /// The method result
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Converts the payload into a `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Error { error } => Err(error),
            Self::Success { result } => Ok(result),
        }
    }
}

/// A JSON-RPC 2.0 error payload.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, thiserror::Error)]
#[error("{message} (code: {code})")]
pub struct Error {
    /// The error code
    pub code: i64,
    /// The error message
    pub message: String,
    /// Additional error data, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl From<Error> for RemoteError {
    fn from(error: Error) -> Self {
        Self {
            code: Some(error.code),
            message: error.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_decodes() {
        let response: Response<String> =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": 1, "result": "0xe"}"#)
                .expect("decodes");

        assert_eq!(response.id, Id::Num(1));
        assert_eq!(response.data.into_result().expect("success"), "0xe");
    }

    #[test]
    fn error_response_decodes() {
        let response: Response<String> = serde_json::from_str(
            r#"{"jsonrpc": "2.0", "id": "abc", "error": {"code": -32601, "message": "method not found"}}"#,
        )
        .expect("decodes");

        let error = response.data.into_result().expect_err("error payload");
        assert_eq!(error.code, -32601);

        let remote = RemoteError::from(error);
        assert_eq!(remote.code, Some(-32601));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let result: Result<Response<String>, _> =
            serde_json::from_str(r#"{"jsonrpc": "1.0", "id": 1, "result": "x"}"#);
        assert!(result.is_err());
    }
}
