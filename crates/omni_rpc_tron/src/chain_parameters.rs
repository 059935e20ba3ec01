use serde::{Deserialize, Serialize};

/// Result of `wallet/getchainparameters`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainParameters {
    /// The committee-governed chain parameters.
    #[serde(rename = "chainParameter", default)]
    pub chain_parameter: Vec<ChainParameter>,
}

/// A single committee-governed parameter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainParameter {
    /// Parameter name, e.g. `getMaintenanceTimeInterval`.
    pub key: String,
    /// Parameter value; the node omits it for unset parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}
