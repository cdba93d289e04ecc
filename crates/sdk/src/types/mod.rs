//! SDK Request/Response Types
//!
//! One request and one result type per daemon method. Explicit optional
//! arguments serialize as `null`; open-ended option sets skip unset fields.

pub mod amount;
pub mod claim;
pub mod daemon;
pub mod file;
pub mod publish;
pub mod stream;
pub mod wallet;

pub use amount::{Amount, IntoAmount};
pub use claim::{
    AbandonResult, ClaimCategory, ClaimInfo, ClaimSummary, ClaimTransaction, ClaimsForName,
    NameClaim, OwnedClaim, ResolvedClaim, ResolvedUri, Support, SupportResult,
};
pub use daemon::{DaemonSettings, DaemonStatus, SettingsUpdate};
pub use file::{FileDeleteRequest, FileInfo, FileListOptions, FileStatus};
pub use publish::{
    Fee, FlatFee, KeyFee, MetadataFee, PublishOptions, Sources, StreamMetadata,
    REQUIRED_METADATA_FIELDS,
};
pub use stream::{DescriptorResult, GetOptions, PaymentRateManager, PeerContact};
pub use wallet::{DecodedTransaction, TransactionSummary};

use serde::{Deserialize, Deserializer};

/// Output index, sent by some daemon versions as a string
pub(crate) fn de_nout<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Nout {
        Int(u32),
        Str(String),
    }

    match Nout::deserialize(deserializer)? {
        Nout::Int(n) => Ok(n),
        Nout::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
