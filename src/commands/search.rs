//! Search command implementation.
//!
//! The search command:
//! 1. Resolves the finder configuration
//! 2. Queries the node for the block
//! 3. Prints and/or writes the outcome

use crate::commands::models::SearchArgs;
use crate::output::{render_result, write_report, SearchReport};
use crate::search::{SearchResult, TransactionFinder};
use crate::utils::config::FinderConfig;
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the search command
///
/// **Public** - main entry point called from main.rs
///
/// A failed search is not an `Err`: the outcome is returned so the caller
/// can decide the exit status. `Err` means the command itself could not run
/// (bad config file, unwritable output path).
pub async fn execute_search(args: SearchArgs) -> Result<SearchResult> {
    let start_time = Instant::now();

    let config = resolve_config(&args)?;
    let finder = TransactionFinder::from_config(config).context("Failed to create RPC client")?;

    info!(
        "RPC endpoint: {}",
        finder
            .config()
            .ethereum_server
            .as_deref()
            .unwrap_or("<not configured>")
    );

    let result = finder
        .search_until(&args.block_number, &args.address, interrupted())
        .await;

    if args.print_summary {
        println!(
            "\n{}",
            render_result(&args.block_number, &args.address, &result)
        );
    }

    if let Some(path) = &args.output_json {
        let report = SearchReport::new(&args.block_number, &args.address, result.clone());
        write_report(&report, path).context("Failed to write search report")?;
        info!("✓ Report written to: {}", path.display());
    }

    info!(
        "Search finished with {} in {:.2}s",
        result.status(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(result)
}

/// Merge config file and CLI overrides
///
/// **Public** - exposed for tests
pub fn resolve_config(args: &SearchArgs) -> Result<FinderConfig> {
    let mut config = match &args.config_path {
        Some(path) => FinderConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FinderConfig::default(),
    };

    if let Some(url) = args.rpc_url.as_deref().filter(|u| !u.is_empty()) {
        config.ethereum_server = Some(url.to_string());
    }

    if let Some(timeout) = args.timeout {
        config.request_timeout = timeout;
    }

    Ok(config)
}

/// Completes on Ctrl-C; never completes if the handler can't be installed
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Interrupted, cancelling search");
}

/// Validate search arguments
///
/// **Public** - can be called before execute_search for early validation
pub fn validate_args(args: &SearchArgs) -> Result<()> {
    if args.block_number.is_empty() || args.address.is_empty() {
        anyhow::bail!("BlockNumber/Address input fields must have a value");
    }

    // Empty counts as unset, as in resolve_config
    if let Some(url) = args.rpc_url.as_deref().filter(|u| !u.is_empty()) {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("RPC URL must start with http:// or https://");
        }
    }

    if args.timeout.is_some_and(|t| t.is_zero()) {
        anyhow::bail!("timeout must be greater than 0");
    }

    Ok(())
}
