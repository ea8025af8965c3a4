//! Decision table from a host answer to a search outcome.
//!
//! Precedence, first match wins:
//! 1. non-2xx status        -> `UpstreamHttp` (error code/message copied if present)
//! 2. `error` present       -> `UpstreamRpc`
//! 3. `result` absent/null  -> `NotFound`
//! 4. otherwise             -> `Found`
//!
//! Failures before an envelope exists (transport, decode, config) never
//! reach this table; the finder maps them to `Internal`.

use super::filter::filter_transactions;
use super::result::{SearchResult, StructuredError};
use crate::rpc::types::{Block, JsonRpcError, JsonRpcResponse};

/// Classified host answer
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Found(Block),
    UpstreamHttp(Option<JsonRpcError>),
    UpstreamRpc(JsonRpcError),
    NotFound,
}

/// Classify a decoded envelope given whether the HTTP status was 2xx
pub fn classify(http_success: bool, envelope: JsonRpcResponse<Block>) -> Verdict {
    if !http_success {
        return Verdict::UpstreamHttp(envelope.error);
    }

    match (envelope.error, envelope.result) {
        (Some(error), _) => Verdict::UpstreamRpc(error),
        (None, None) => Verdict::NotFound,
        (None, Some(block)) => Verdict::Found(block),
    }
}

impl Verdict {
    /// Turn the verdict into the caller-facing result, filtering the block
    /// on success.
    pub fn into_result(self, block_number: &str, address: &str) -> SearchResult {
        match self {
            Verdict::Found(block) => {
                SearchResult::success(filter_transactions(block.transactions, address))
            }
            Verdict::UpstreamHttp(error) => {
                SearchResult::failure(StructuredError::upstream_http(error))
            }
            Verdict::UpstreamRpc(error) => {
                SearchResult::failure(StructuredError::upstream_rpc(error))
            }
            Verdict::NotFound => {
                SearchResult::failure(StructuredError::not_found(address, block_number))
            }
        }
    }
}
