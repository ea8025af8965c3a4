//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The `Display` text of `TransportError` and `ParseError` is surfaced to the
//! caller as the `message` of an internal-error result, so it carries the
//! underlying text without extra prefixes.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while sending a request to the JSON-RPC host
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("request cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

/// Errors raised while decoding a JSON-RPC response body
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),
}

/// Anything that stops a search before the host's answer can be classified
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("RPC endpoint is not configured")]
    MissingEndpoint,

    #[error("failed to encode request: {0}")]
    EncodeFailed(serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
