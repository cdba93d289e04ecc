//! Claim, channel and support types

use super::amount::Amount;
use super::de_nout;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// channel_new
#[derive(Debug, Clone, Serialize)]
pub struct ChannelNewRequest {
    pub channel_name: String,
    pub amount: Amount,
}

/// claim_abandon
#[derive(Debug, Clone, Serialize)]
pub struct ClaimAbandonRequest {
    pub claim_id: String,
}

/// claim_list
#[derive(Debug, Clone, Serialize)]
pub struct ClaimListRequest {
    pub name: String,
}

/// claim_new_support
#[derive(Debug, Clone, Serialize)]
pub struct ClaimNewSupportRequest {
    pub name: String,
    pub claim_id: String,
    pub amount: Amount,
}

/// claim_show
///
/// Unset lookups are sent as `null`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClaimShowRequest {
    pub name: String,
    pub txid: Option<String>,
    pub nout: Option<u32>,
    pub claim_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Result of a claim-creating transaction (channel_new, publish)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimTransaction {
    /// Hex encoded transaction
    #[serde(default)]
    pub tx: Option<String>,
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    pub fee: f64,
    pub claim_id: String,
}

/// channel_new wraps its transaction in a nested `result` object
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NestedClaimTransaction {
    pub result: ClaimTransaction,
}

/// claim_abandon
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbandonResult {
    pub txid: String,
    pub fee: f64,
}

/// claim_new_support
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupportResult {
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    pub fee: f64,
}

/// Support attached to a claim
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Support {
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    pub amount: f64,
}

/// Claim entry as returned by claim_list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NameClaim {
    pub amount: f64,
    /// Amount including supports
    pub effective_amount: f64,
    pub claim_id: String,
    pub height: i64,
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    #[serde(default)]
    pub supports: Vec<Support>,
    #[serde(default)]
    pub value: Value,
}

/// claim_list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimsForName {
    pub claims: Vec<NameClaim>,
    #[serde(default)]
    pub supports_without_claims: Vec<Support>,
    #[serde(default)]
    pub last_takeover_height: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimCategory {
    Claim,
    Update,
    Support,
    #[serde(other)]
    Other,
}

/// claim_list_mine entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnedClaim {
    pub address: String,
    pub amount: f64,
    pub blocks_to_expiration: i64,
    pub category: ClaimCategory,
    pub claim_id: String,
    pub confirmations: i64,
    pub expiration_height: i64,
    pub expired: bool,
    pub height: i64,
    pub is_spent: bool,
    pub name: String,
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    #[serde(default)]
    pub value: Value,
}

/// channel_list_mine entry
///
/// Fields beyond the identifying ones vary by daemon version and are kept in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimSummary {
    pub name: String,
    pub claim_id: String,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// claim_show
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimInfo {
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    pub amount: f64,
    #[serde(default)]
    pub value: Value,
    /// Height of claim takeover
    pub height: i64,
    pub claim_id: String,
    #[serde(default)]
    pub supports: Vec<Support>,
}

/// Claim as returned by resolve
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResolvedClaim {
    #[serde(default)]
    pub address: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub effective_amount: Option<f64>,
    pub claim_id: String,
    #[serde(default)]
    pub claim_sequence: Option<i64>,
    #[serde(default)]
    pub decoded_claim: bool,
    pub height: i64,
    #[serde(default)]
    pub depth: Option<i64>,
    #[serde(default)]
    pub has_signature: Option<bool>,
    pub name: String,
    /// Set when the claim is in a channel
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub supports: Vec<Support>,
    pub txid: String,
    #[serde(deserialize_with = "de_nout")]
    pub nout: u32,
    #[serde(default)]
    pub signature_is_valid: Option<bool>,
    /// Decoded ClaimDict, or a hex string if not decoded
    #[serde(default)]
    pub value: Value,
}

/// resolve
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResolvedUri {
    /// Present if the URI resolves to a channel or a claim in a channel
    #[serde(default)]
    pub certificate: Option<ResolvedClaim>,
    /// Present if the URI resolves to a channel
    #[serde(default)]
    pub claims_in_channel: Option<Vec<ResolvedClaim>>,
    /// Present if the URI resolves to a claim
    #[serde(default)]
    pub claim: Option<ResolvedClaim>,
}
