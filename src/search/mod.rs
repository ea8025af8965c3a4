//! Block transaction search.
//!
//! This module ties the RPC plumbing together:
//! - `finder` sequences request, transport, decoding and classification
//! - `classifier` maps a host answer to an outcome
//! - `filter` picks the transactions touching an address
//! - `result` defines the uniform outcome returned to callers

pub mod classifier;
pub mod filter;
pub mod finder;
pub mod result;

// Re-export main types
pub use classifier::{classify, Verdict};
pub use filter::filter_transactions;
pub use finder::TransactionFinder;
pub use result::{ErrorKind, SearchResult, Status, StructuredError};
