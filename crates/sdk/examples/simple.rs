//! Simple SDK Example
//!
//! Demonstrates basic usage of the LBRY SDK.
//!
//! # Usage
//!
//! 1. Start an LBRY daemon (listens on http://localhost:5279/lbryapi)
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple -- lbry://what
//!    ```

use lbry_sdk::{FileListOptions, LbryClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let uri = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "lbry://what".to_string());

    println!("LBRY SDK - Simple Example");
    println!("=========================\n");

    // 1. Connect to daemon
    let client = LbryClient::from_env()?;
    println!("1. Using daemon at {}\n", client.endpoint());

    // 2. Daemon status
    let status = client.status(false).await?;
    println!("2. Daemon running: {:?}\n", status.is_running);

    // 3. Wallet balance
    let balance = client.wallet_balance(None, None).await?;
    println!("3. Balance: {} LBC\n", balance);

    // 4. Resolve a URI
    println!("4. Resolving {}...", uri);
    match client.resolve(&uri).await? {
        Some(resolved) => {
            if let Some(claim) = resolved.claim {
                println!("   claim {} at height {}", claim.claim_id, claim.height);
            }
            if let Some(channel) = resolved.certificate {
                println!("   channel {} ({})", channel.name, channel.claim_id);
            }
        }
        None => println!("   nothing resolves"),
    }
    println!();

    // 5. Cost estimate
    match client.stream_cost_estimate(uri.trim_start_matches("lbry://"), None).await? {
        Some(cost) => println!("5. Estimated cost: {} LBC\n", cost),
        None => println!("5. Cost unknown\n"),
    }

    // 6. Local files
    let files = client.file_list(FileListOptions::default()).await?;
    println!("6. {} managed file(s)", files.len());
    for file in &files {
        println!("   - {} [{}]", file.file_name, if file.completed { "done" } else { "partial" });
    }

    Ok(())
}
