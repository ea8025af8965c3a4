use crate::utils::config::REPORT_SCHEMA_VERSION;

/// Display version information
pub fn display_version() {
    println!("Block Tx Finder v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Finds the transactions of an Ethereum block that involve an address.");
}
