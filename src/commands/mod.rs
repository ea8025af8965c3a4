//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod search;
pub mod utils;

// Re-export main command functions
pub use models::SearchArgs;
pub use search::{execute_search, resolve_config, validate_args};
pub use utils::display_version;
