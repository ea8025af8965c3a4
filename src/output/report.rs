//! Report JSON schema.
//!
//! Versioned so downstream tooling can detect format changes.

use crate::search::SearchResult;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Block number as queried
    pub block_number: String,

    /// Address as queried
    pub address: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Outcome of the search
    pub result: SearchResult,
}

impl SearchReport {
    pub fn new(block_number: &str, address: &str, result: SearchResult) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            block_number: block_number.to_string(),
            address: address.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }
}
