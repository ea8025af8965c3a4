use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the search command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    /// RPC endpoint URL, overrides the config file
    pub rpc_url: Option<String>,

    /// TOML config file (optional)
    pub config_path: Option<PathBuf>,

    /// Block number to search (hex, as the node expects it)
    pub block_number: String,

    /// Address to look for as sender or recipient
    pub address: String,

    /// Request timeout, overrides the config file
    pub timeout: Option<Duration>,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}
