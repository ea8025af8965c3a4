//! Output writers for search results.
//!
//! This module handles presenting results in various formats:
//! - JSON reports on disk
//! - Text summaries for the terminal

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use report::SearchReport;
pub use text::render_result;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
