use serde::{Deserialize, Serialize};

/// Transaction object returned by `wallet/gettransactionbyid`.
///
/// Beyond the id, contract payloads differ per transaction type and pass
/// through as raw JSON.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// The transaction id.
    #[serde(rename = "txID")]
    pub tx_id: String,
    /// Execution results, one per contract.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ret: Vec<serde_json::Value>,
    /// Signatures over the raw data.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signature: Vec<String>,
    /// The raw transaction data, opaque to the SDK.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub raw_data: serde_json::Value,
    /// Hex encoding of the raw transaction data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data_hex: Option<String>,
}
