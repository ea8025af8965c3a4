//! Block Tx Finder CLI
//!
//! Looks up an Ethereum block over JSON-RPC and lists the transactions
//! sent from or to an address.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use block_tx_finder::commands::{display_version, execute_search, validate_args, SearchArgs};

/// Block Tx Finder - transactions of a block touching an address
#[derive(Parser, Debug)]
#[command(name = "tx-finder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Search a block for transactions involving an address
    Search {
        /// Block number (hex, e.g. 0xced189)
        #[arg(short, long)]
        block: String,

        /// Address to match against sender and recipient
        #[arg(short, long)]
        address: String,

        /// RPC endpoint URL (overrides the config file)
        #[arg(short, long, env = "ETHEREUM_SERVER")]
        rpc: Option<String>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Request timeout in seconds (overrides the config file)
        #[arg(long)]
        timeout: Option<u64>,

        /// Output path for JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        summary: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Search {
            block,
            address,
            rpc,
            config,
            timeout,
            output,
            summary,
        } => {
            let args = SearchArgs {
                rpc_url: rpc,
                config_path: config,
                block_number: block,
                address,
                timeout: timeout.map(Duration::from_secs),
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            let result = execute_search(args).await?;
            if let Some(error) = result.error() {
                anyhow::bail!("Search failed: {}", error);
            }
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
