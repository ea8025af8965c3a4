//! Encoding of outgoing requests and decoding of host responses.

use super::types::{Block, JsonRpcRequest, JsonRpcResponse};
use crate::utils::error::{ParseError, SearchError};

/// Serialize the eth_getBlockByNumber request body for `block_number`
pub fn encode_block_request(block_number: &str) -> Result<String, SearchError> {
    serde_json::to_string(&JsonRpcRequest::block_by_number(block_number))
        .map_err(SearchError::EncodeFailed)
}

/// Decode a raw response body into a JSON-RPC envelope
///
/// All-or-nothing: a body that is not a JSON-RPC shaped document (or whose
/// `result` is not a block) is rejected whole.
pub fn decode_response(body: &str) -> Result<JsonRpcResponse<Block>, ParseError> {
    Ok(serde_json::from_str(body)?)
}
