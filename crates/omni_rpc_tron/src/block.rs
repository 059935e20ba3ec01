use serde::{Deserialize, Serialize};

/// Block object returned by `wallet/getnowblock` and `wallet/getblock`.
///
/// Only the header fields the SDK inspects are typed; transactions pass
/// through as raw JSON.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Block {
    /// The block hash.
    #[serde(rename = "blockID", default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// The block header.
    pub block_header: BlockHeader,
    /// Transactions included in the block, opaque to the SDK.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<serde_json::Value>,
}

/// Header of a [`Block`].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BlockHeader {
    /// The raw header data.
    pub raw_data: RawBlockHeader,
    /// The witness signature over the raw data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_signature: Option<String>,
}

/// Raw header data of a [`Block`].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RawBlockHeader {
    /// The block height. The node omits the field for the genesis block.
    #[serde(default)]
    pub number: u64,
    /// Unix timestamp of the block, in milliseconds.
    #[serde(default)]
    pub timestamp: u64,
    /// Hash of the parent block.
    #[serde(rename = "parentHash", default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,
    /// Root of the transaction trie.
    #[serde(rename = "txTrieRoot", default, skip_serializing_if = "Option::is_none")]
    pub tx_trie_root: Option<String>,
    /// Address of the witness that produced the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_address: Option<String>,
    /// Block version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_decodes_the_wallet_api_shape() {
        let body = r#"{
            "blockID": "00000000000f424013e51b18e0782a32fa079ddafdb2f4c343468cf8896dc887",
            "block_header": {
                "raw_data": {
                    "number": 1000000,
                    "txTrieRoot": "0000000000000000000000000000000000000000000000000000000000000000",
                    "witness_address": "41928c9af0651632157ef27a2cf17ca72c575a4d21",
                    "parentHash": "00000000000f423fb16e3c5f337ea092ae1a7419e2b2f25713893c6cb4598c76",
                    "version": 3,
                    "timestamp": 1532881908000
                },
                "witness_signature": "6b"
            }
        }"#;

        let block: Block = serde_json::from_str(body).expect("decodes");
        assert_eq!(block.block_header.raw_data.number, 1_000_000);
        assert_eq!(block.block_header.raw_data.version, Some(3));
        assert!(block.transactions.is_empty());
    }

    #[test]
    fn genesis_block_without_number_decodes() {
        let body = r#"{"block_header": {"raw_data": {"timestamp": 0}}}"#;
        let block: Block = serde_json::from_str(body).expect("decodes");
        assert_eq!(block.block_header.raw_data.number, 0);
    }
}
