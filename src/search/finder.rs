//! Search entry point.
//!
//! A search runs: encode request -> POST -> decode envelope -> classify ->
//! filter. The POST is the only await point; it is bounded by the configured
//! timeout and raced against the caller's shutdown signal.

use super::classifier::classify;
use super::result::{SearchResult, StructuredError};
use crate::rpc::client::{HostResponse, HttpTransport, Transport};
use crate::rpc::codec::{decode_response, encode_block_request};
use crate::rpc::types::{Block, JsonRpcResponse};
use crate::utils::config::FinderConfig;
use crate::utils::error::{SearchError, TransportError};
use log::{debug, info};
use std::future::Future;
use tokio::time::timeout;

/// Finds the transactions of a block that involve an address.
///
/// Holds no per-search state; one finder can serve concurrent searches.
pub struct TransactionFinder<T = HttpTransport> {
    transport: T,
    config: FinderConfig,
}

impl TransactionFinder<HttpTransport> {
    /// Build a finder backed by a `reqwest` transport
    ///
    /// The client gets no timeout; `request_timeout` is enforced by the
    /// finder alone so the failure message is always the same.
    pub fn from_config(config: FinderConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::without_timeout()?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> TransactionFinder<T> {
    pub fn new(transport: T, config: FinderConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Search `block_number` for transactions sent from or to `address`.
    ///
    /// Inputs are passed to the host untouched; emptiness checks belong to
    /// the caller. Always returns a result, never an error.
    pub async fn search(&self, block_number: &str, address: &str) -> SearchResult {
        self.search_until(block_number, address, std::future::pending())
            .await
    }

    /// Like [`search`](Self::search), but gives up with an internal error
    /// once `shutdown` completes.
    pub async fn search_until<F>(
        &self,
        block_number: &str,
        address: &str,
        shutdown: F,
    ) -> SearchResult
    where
        F: Future<Output = ()>,
    {
        info!(
            "Searching for transactions for address {} within block {}",
            address, block_number
        );

        let (response, envelope) = match self.exchange(block_number, shutdown).await {
            Ok(answer) => answer,
            Err(err) => {
                info!("Error while searching for transactions: {}", err);
                return SearchResult::failure(StructuredError::internal(err.to_string()));
            }
        };

        if response.is_success() {
            info!(
                "Successful response from host: HTTP {} ({} bytes)",
                response.status,
                response.body.len()
            );
        } else {
            info!(
                "Unsuccessful response from host: HTTP {} {}",
                response.status, response.body
            );
        }

        classify(response.is_success(), envelope).into_result(block_number, address)
    }

    /// Send the request and decode the answer. Any error here is internal.
    async fn exchange<F>(
        &self,
        block_number: &str,
        shutdown: F,
    ) -> Result<(HostResponse, JsonRpcResponse<Block>), SearchError>
    where
        F: Future<Output = ()>,
    {
        let url = self
            .config
            .ethereum_server
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SearchError::MissingEndpoint)?;

        let body = encode_block_request(block_number)?;
        debug!("RPC request: {}", body);

        let limit = self.config.request_timeout;
        let send = timeout(limit, self.transport.post_json(url, body));

        let response = tokio::select! {
            biased;
            _ = shutdown => return Err(TransportError::Cancelled.into()),
            sent = send => sent.map_err(|_| TransportError::Timeout(limit))??,
        };

        debug!("RPC response body: {}", response.body);

        let envelope = decode_response(&response.body)?;
        Ok((response, envelope))
    }
}
