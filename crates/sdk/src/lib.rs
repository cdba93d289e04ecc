//! LBRY SDK - Rust Client Library
//!
//! Typed client for the JSON-RPC API of a local LBRY daemon.
//!
//! # Example
//!
//! ```no_run
//! use lbry_sdk::{FileListOptions, LbryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults to http://localhost:5279/lbryapi, or LBRY_API_URL
//!     let client = LbryClient::from_env()?;
//!
//!     let status = client.status(false).await?;
//!     println!("Daemon running: {:?}", status.is_running);
//!
//!     for file in client.file_list(FileListOptions::default()).await? {
//!         println!("{} ({})", file.file_name, file.sd_hash);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
pub mod config;
pub mod dispatcher;
mod error;
pub mod transport;
pub mod types;

pub use api::normalize_channel_name;
pub use client::LbryClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{LbryError, Result};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{
    AbandonResult, Amount, ClaimCategory, ClaimInfo, ClaimSummary, ClaimTransaction,
    ClaimsForName, DaemonSettings, DaemonStatus, DecodedTransaction, DescriptorResult, Fee,
    FileDeleteRequest, FileInfo, FileListOptions, FileStatus, FlatFee, GetOptions, IntoAmount,
    KeyFee, MetadataFee, NameClaim, OwnedClaim, PaymentRateManager, PeerContact,
    PublishOptions, ResolvedClaim, ResolvedUri, SettingsUpdate, Sources, StreamMetadata,
    Support, SupportResult, TransactionSummary, REQUIRED_METADATA_FIELDS,
};
