//! JSON-RPC plumbing for talking to Ethereum nodes.

pub mod client;
pub mod codec;
pub mod types;

// Re-export main types
pub use client::{HostResponse, HttpTransport, Transport};
pub use codec::{decode_response, encode_block_request};
pub use types::{Block, JsonRpcError, JsonRpcRequest, JsonRpcResponse, Transaction};
