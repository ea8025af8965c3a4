//! Types for JSON-RPC communication with an Ethereum node.
//!
//! Based on the Ethereum JSON-RPC spec. Hex quantities are kept as strings;
//! nothing here interprets them numerically.

use crate::utils::config::{GET_BLOCK_BY_NUMBER, JSONRPC_VERSION};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request for eth_getBlockByNumber
    ///
    /// The trailing `true` asks the node for full transaction objects
    /// instead of transaction hashes. The block number goes through as-is;
    /// the node reports malformed hex itself.
    pub fn block_by_number(block_number: &str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: 1,
            method: GET_BLOCK_BY_NUMBER.to_string(),
            params: vec![Value::String(block_number.to_string()), Value::Bool(true)],
        }
    }
}

/// JSON-RPC 2.0 response structure
///
/// `jsonrpc` and `id` are optional: nodes drop the id when they reject
/// the request itself (e.g. `-32600 invalid json request`).
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    /// A missing field decodes to `None`
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Block returned by eth_getBlockByNumber with full transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// `null` for pending blocks
    #[serde(default)]
    pub number: Option<String>,

    #[serde(default)]
    pub hash: Option<String>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Header fields we don't use (miner, gasLimit, logsBloom, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Transaction object as returned inside a block
///
/// Only `from` is required; a node omitting anything else must not sink
/// the whole block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub hash: Option<String>,

    #[serde(default)]
    pub block_hash: Option<String>,

    #[serde(default)]
    pub block_number: Option<String>,

    pub from: String,

    /// `None` for contract creation
    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub gas: Option<String>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Transaction {
    /// Whether `address` is the sender or the recipient
    pub fn involves(&self, address: &str) -> bool {
        self.from == address || self.to.as_deref() == Some(address)
    }
}
