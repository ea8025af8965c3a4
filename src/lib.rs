//! Block Tx Finder
//!
//! Answers one question: which transactions in a given Ethereum block
//! involve a given address? The block is fetched with
//! `eth_getBlockByNumber` from a JSON-RPC node and filtered locally.
//!
//! ## Getting Started
//!
//! ```ignore
//! use block_tx_finder::search::TransactionFinder;
//! use block_tx_finder::utils::FinderConfig;
//!
//! let finder = TransactionFinder::from_config(FinderConfig::new("http://localhost:8545"))?;
//! let result = finder.search("0xced189", "0x5aa3393e361c2eb342408559309b3e873cd876d6").await;
//! ```
//!
//! Most users should use the CLI:
//!
//! ```bash
//! tx-finder search --rpc http://localhost:8545 --block 0xced189 --address 0x5aa3...
//! ```

pub mod commands;
pub mod output;
pub mod rpc;
pub mod search;
pub mod utils;
