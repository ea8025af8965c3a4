//! Selection of the transactions that touch an address.

use crate::rpc::types::Transaction;

/// Keep the transactions sent from or to `address`, in block order.
///
/// Exact string comparison: `0xAB..` and `0xab..` are different addresses
/// here. No deduplication; no match is an empty list.
pub fn filter_transactions(transactions: Vec<Transaction>, address: &str) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| tx.involves(address))
        .collect()
}
