use serde::{Deserialize, Serialize};

/// Identifies an account. The address is forwarded to the node verbatim;
/// whether it is base58check or hex is governed by the `visible` flag on
/// the invoking method.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountIdentifier {
    /// The account address.
    pub address: String,
}

impl AccountIdentifier {
    /// Creates an identifier for the given address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Identifies a block by hash and height. Forwarded to the node verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockIdentifier {
    /// The block hash.
    pub hash: String,
    /// The block height.
    pub number: u64,
}

/// Result of `wallet/getaccountbalance`: the balance of an account as of a
/// specific historical block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountBalance {
    /// The balance in sun.
    #[serde(default)]
    pub balance: i64,
    /// The block the balance was read at.
    pub block_identifier: BlockIdentifier,
}
