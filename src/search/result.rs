//! Uniform outcome of a search.
//!
//! A search never raises: every path ends in a [`SearchResult`], either the
//! matching transactions or a [`StructuredError`] whose [`ErrorKind`] says
//! which stage gave up.

use crate::rpc::types::{JsonRpcError, Transaction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse outcome tag, as rendered in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "SUCCESS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// Why a search failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Request could not be built, sent or decoded
    Internal,
    /// Host answered with a non-2xx status
    UpstreamHttp,
    /// Host answered 2xx with a JSON-RPC error object
    UpstreamRpc,
    /// Host answered 2xx with neither result nor error
    NotFound,
}

impl ErrorKind {
    /// Description text of the kind. `NotFound` descriptions extend it
    /// with the queried address and block.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Internal => "Internal Error",
            ErrorKind::UpstreamHttp => "Unsuccessful response from host",
            ErrorKind::UpstreamRpc => "Error from host",
            ErrorKind::NotFound => "No transaction found",
        }
    }
}

/// Failure detail handed back to the caller
///
/// `description` is the human-facing category text derived from `kind`;
/// `message` carries upstream or low-level detail verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredError {
    pub kind: ErrorKind,
    pub code: i64,
    pub message: String,
    pub description: String,
}

impl StructuredError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            code: 0,
            message: message.into(),
            description: ErrorKind::Internal.label().to_string(),
        }
    }

    pub fn upstream_http(error: Option<JsonRpcError>) -> Self {
        let (code, message) = error.map(|e| (e.code, e.message)).unwrap_or_default();
        Self {
            kind: ErrorKind::UpstreamHttp,
            code,
            message,
            description: ErrorKind::UpstreamHttp.label().to_string(),
        }
    }

    pub fn upstream_rpc(error: JsonRpcError) -> Self {
        Self {
            kind: ErrorKind::UpstreamRpc,
            code: error.code,
            message: error.message,
            description: ErrorKind::UpstreamRpc.label().to_string(),
        }
    }

    pub fn not_found(address: &str, block_number: &str) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            code: 0,
            message: String::new(),
            description: format!(
                "{} for address {} within the block {}",
                ErrorKind::NotFound.label(),
                address,
                block_number
            ),
        }
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if self.code != 0 {
            write!(f, " (code {})", self.code)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

/// Outcome of one search, serialised as `{"status": "SUCCESS", "data": [...]}`
/// or `{"status": "FAIL", "error": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum SearchResult {
    #[serde(rename = "SUCCESS")]
    Success {
        #[serde(rename = "data")]
        transactions: Vec<Transaction>,
    },
    #[serde(rename = "FAIL")]
    Failure { error: StructuredError },
}

impl SearchResult {
    pub fn success(transactions: Vec<Transaction>) -> Self {
        SearchResult::Success { transactions }
    }

    pub fn failure(error: StructuredError) -> Self {
        SearchResult::Failure { error }
    }

    pub fn status(&self) -> Status {
        match self {
            SearchResult::Success { .. } => Status::Success,
            SearchResult::Failure { .. } => Status::Fail,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    /// Matching transactions, present iff the search succeeded
    pub fn transactions(&self) -> Option<&[Transaction]> {
        match self {
            SearchResult::Success { transactions } => Some(transactions.as_slice()),
            SearchResult::Failure { .. } => None,
        }
    }

    /// Failure detail, present iff the search failed
    pub fn error(&self) -> Option<&StructuredError> {
        match self {
            SearchResult::Success { .. } => None,
            SearchResult::Failure { error } => Some(error),
        }
    }
}
