use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;

/// Block object returned by `eth_getBlockByNumber`.
///
/// Only the fields the SDK inspects are typed; transactions pass through as
/// raw JSON (hashes or full objects, depending on the request).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// The block hash. `None` for a pending block.
    pub hash: Option<String>,
    /// Hash of the parent block.
    pub parent_hash: String,
    /// The block height. `None` for a pending block.
    pub number: Option<Quantity>,
    /// Unix timestamp the block was collated at.
    pub timestamp: Quantity,
    /// Gas used by all transactions in the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<Quantity>,
    /// Transactions included in the block, opaque to the SDK.
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_decodes_hashes_only_transactions() {
        let body = r#"{
            "hash": "0x8b32d486bf105f989b7e6cfc54d0d982dad2fa87e9b3b38b1a16c81b8d9c18e5",
            "parentHash": "0x4dff7b2b1c84e1d0e7e8b4a86f1ed8b89898ab09a2c254ff3e0b8f18dc84e6d1",
            "number": "0xf4240",
            "timestamp": "0x6136d46d",
            "gasUsed": "0x0",
            "transactions": ["0x3e8d2e9f7a91c2c1c3ff48a215bb38b1a16c81b8d9c18e5b32d486bf105f989b"]
        }"#;

        let block: Block = serde_json::from_str(body).expect("decodes");
        assert_eq!(block.number, Some(Quantity(1_000_000)));
        assert_eq!(block.transactions.len(), 1);
    }

    #[test]
    fn pending_block_without_number_decodes() {
        let body = r#"{
            "hash": null,
            "parentHash": "0x4dff7b2b1c84e1d0e7e8b4a86f1ed8b89898ab09a2c254ff3e0b8f18dc84e6d1",
            "number": null,
            "timestamp": "0x6136d46d"
        }"#;

        let block: Block = serde_json::from_str(body).expect("decodes");
        assert!(block.hash.is_none());
        assert!(block.number.is_none());
        assert!(block.transactions.is_empty());
    }
}
