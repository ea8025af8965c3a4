//! Configuration and constants for the finder.

use super::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default timeout for RPC requests
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

pub const JSONRPC_VERSION: &str = "2.0";
pub const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

/// Runtime configuration handed to the finder at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    /// JSON-RPC endpoint of the Ethereum host. `None` fails every search.
    pub ethereum_server: Option<String>,

    /// Upper bound on a single request/response exchange
    pub request_timeout: Duration,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            ethereum_server: None,
            request_timeout: DEFAULT_RPC_TIMEOUT,
        }
    }
}

/// On-disk shape of the TOML config file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    ethereum_server: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl FinderConfig {
    pub fn new(ethereum_server: impl Into<String>) -> Self {
        Self {
            ethereum_server: Some(ethereum_server.into()),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Parse a config from TOML text
    ///
    /// ```toml
    /// ethereum_server = "https://mainnet.infura.io/v3/<key>"
    /// request_timeout_secs = 30
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;

        let request_timeout = match file.request_timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue(
                    "request_timeout_secs must be greater than 0".to_string(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_RPC_TIMEOUT,
        };

        Ok(Self {
            ethereum_server: file.ethereum_server.filter(|s| !s.trim().is_empty()),
            request_timeout,
        })
    }

    /// Load a config from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
