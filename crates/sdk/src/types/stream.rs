//! Stream, blob and name resolution types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Optional arguments of get
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetOptions {
    /// User specified name for the downloaded file
    pub file_name: Option<String>,
    /// Download timeout in seconds
    pub timeout: Option<u64>,
    pub download_directory: Option<String>,
}

/// get
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetRequest {
    pub uri: String,
    #[serde(flatten)]
    pub options: GetOptions,
}

/// get_availability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetAvailabilityRequest {
    pub uri: String,
    /// sd blob download timeout
    pub sd_timeout: Option<u64>,
    /// How long to look for peers
    pub peer_timeout: Option<u64>,
}

/// resolve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveRequest {
    pub uri: String,
}

/// resolve_name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveNameRequest {
    pub name: String,
}

/// stream_cost_estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamCostEstimateRequest {
    pub name: String,
    /// Stream size in bytes; skips the sd blob download when given
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentRateManager {
    #[serde(rename = "only-free")]
    OnlyFree,
}

/// descriptor_get
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorGetRequest {
    pub sd_hash: String,
    pub timeout: Option<u64>,
    /// `None` uses the daemon's default rate manager
    pub payment_rate_manager: Option<PaymentRateManager>,
}

/// descriptor_get result
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DescriptorResult {
    /// Success/fail message
    Message(String),
    /// Decoded descriptor
    Decoded(Map<String, Value>),
}

/// peer_list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerListRequest {
    pub blob_hash: String,
    /// Peer search timeout in seconds
    pub timeout: Option<u64>,
}

/// Peer contact returned by peer_list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PeerContact {
    /// `[host, port]`
    Address(String, u16),
    Node {
        host: String,
        port: u16,
        #[serde(default)]
        node_id: Option<String>,
    },
}

impl PeerContact {
    pub fn host(&self) -> &str {
        match self {
            PeerContact::Address(host, _) => host,
            PeerContact::Node { host, .. } => host,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            PeerContact::Address(_, port) | PeerContact::Node { port, .. } => *port,
        }
    }
}

/// reflect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectRequest {
    pub sd_hash: String,
}
