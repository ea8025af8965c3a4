//! Human-readable rendering of search results for the terminal.

use crate::rpc::types::Transaction;
use crate::search::{SearchResult, StructuredError};
use colored::*;

const RULE: &str = "────────────────────────────────────────────────────────────────────────";

/// Render a search result as a text block
pub fn render_result(block_number: &str, address: &str, result: &SearchResult) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("  Block:   {}\n", block_number));
    out.push_str(&format!("  Address: {}\n", address));
    out.push_str(RULE);
    out.push('\n');

    match result {
        SearchResult::Success { transactions } => {
            out.push_str(&render_transactions(transactions, address));
        }
        SearchResult::Failure { error } => {
            out.push_str(&render_error(error));
        }
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

fn render_transactions(transactions: &[Transaction], address: &str) -> String {
    if transactions.is_empty() {
        return format!("  {}\n", "No matching transactions".yellow());
    }

    let mut out = format!(
        "  {} matching transaction(s)\n\n",
        transactions.len().to_string().green().bold()
    );

    for (i, tx) in transactions.iter().enumerate() {
        let direction = if tx.from == address { "OUT" } else { "IN " };
        out.push_str(&format!(
            "  {:>3}. [{}] {}\n",
            i + 1,
            direction,
            tx.hash.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!("       from:  {}\n", tx.from));
        out.push_str(&format!(
            "       to:    {}\n",
            tx.to.as_deref().unwrap_or("(contract creation)")
        ));
        out.push_str(&format!(
            "       value: {}  gas: {}\n",
            tx.value.as_deref().unwrap_or("-"),
            tx.gas.as_deref().unwrap_or("-")
        ));
    }

    out
}

fn render_error(error: &StructuredError) -> String {
    let mut out = format!("  {} {}\n", "✗".red().bold(), error.description.red());
    if error.code != 0 {
        out.push_str(&format!("    code:    {}\n", error.code));
    }
    if !error.message.is_empty() {
        out.push_str(&format!("    message: {}\n", error.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::types::JsonRpcError;
    use serde_json::Map;

    fn tx(hash: &str, from: &str, to: Option<&str>) -> Transaction {
        Transaction {
            hash: Some(hash.to_string()),
            block_hash: None,
            block_number: Some("0x1".to_string()),
            from: from.to_string(),
            to: to.map(str::to_string),
            value: Some("0x0".to_string()),
            gas: Some("0x5208".to_string()),
            other: Map::new(),
        }
    }

    #[test]
    fn test_render_transactions() {
        let result = SearchResult::success(vec![
            tx("0xh1", "0xaa", Some("0xbb")),
            tx("0xh2", "0xcc", None),
        ]);

        let text = render_result("0x1", "0xaa", &result);

        assert!(text.contains("Block:   0x1"));
        assert!(text.contains("[OUT] 0xh1"));
        assert!(text.contains("[IN ] 0xh2"));
        assert!(text.contains("(contract creation)"));
    }

    #[test]
    fn test_render_empty_success() {
        let text = render_result("0x1", "0xaa", &SearchResult::success(vec![]));
        assert!(text.contains("No matching transactions"));
    }

    #[test]
    fn test_render_error() {
        let result = SearchResult::failure(StructuredError::upstream_rpc(JsonRpcError {
            code: -32602,
            message: "invalid hex string".to_string(),
            data: None,
        }));

        let text = render_result("0x1z", "0xaa", &result);

        assert!(text.contains("Error from host"));
        assert!(text.contains("code:    -32602"));
        assert!(text.contains("message: invalid hex string"));
    }

    #[test]
    fn test_render_not_found_omits_empty_fields() {
        let result = SearchResult::failure(StructuredError::not_found("0xaa", "0x1"));
        let text = render_result("0x1", "0xaa", &result);

        assert!(text.contains("No transaction found for address 0xaa within the block 0x1"));
        assert!(!text.contains("code:"));
        assert!(!text.contains("message:"));
    }
}
