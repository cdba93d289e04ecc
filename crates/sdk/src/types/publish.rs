//! Publish request and stream metadata

use super::amount::Amount;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fields the daemon requires in the final metadata of a publish
pub const REQUIRED_METADATA_FIELDS: [&str; 6] =
    ["title", "description", "author", "language", "license", "nsfw"];

/// Key fee for one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFee {
    pub amount: f64,
    /// Generated by the daemon if omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Fee keyed by currency symbol (LBC, USD, BTC)
pub type Fee = BTreeMap<String, KeyFee>;

/// Fee in the single-currency form the daemon reports for decoded claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatFee {
    pub currency: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Fee carried in stream metadata
///
/// Publishing uses the currency-keyed form. Resolved metadata may carry
/// either form; any other shape is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataFee {
    ByCurrency(Fee),
    Flat(FlatFee),
    Other(Value),
}

impl MetadataFee {
    /// Amount and currency, if the fee has a recognizable shape
    pub fn amount(&self) -> Option<(f64, &str)> {
        match self {
            MetadataFee::ByCurrency(fee) => fee
                .iter()
                .next()
                .map(|(currency, key_fee)| (key_fee.amount, currency.as_str())),
            MetadataFee::Flat(fee) => Some((fee.amount, fee.currency.as_str())),
            MetadataFee::Other(_) => None,
        }
    }
}

impl From<Fee> for MetadataFee {
    fn from(fee: Fee) -> Self {
        MetadataFee::ByCurrency(fee)
    }
}

/// Stream source descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sources {
    pub lbry_sd_hash: String,
}

/// Stream metadata dictionary
///
/// Used both as the `metadata` argument of publish and as the result of
/// resolve_name. Unknown keys round-trip through `extra`. A set typed field
/// wins over an `extra` entry of the same key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<MetadataFee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Sources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StreamMetadata {
    /// True if `field` holds a non-null value
    pub fn has(&self, field: &str) -> bool {
        self.has_typed(field) || self.extra.get(field).is_some_and(|v| !v.is_null())
    }

    /// Drop `extra` entries shadowed by a set typed field
    pub(crate) fn drop_shadowed_extra(&mut self) {
        let shadowed: Vec<String> = self
            .extra
            .keys()
            .filter(|key| self.has_typed(key))
            .cloned()
            .collect();
        for key in shadowed {
            self.extra.remove(&key);
        }
    }

    fn has_typed(&self, field: &str) -> bool {
        match field {
            "title" => self.title.is_some(),
            "description" => self.description.is_some(),
            "author" => self.author.is_some(),
            "language" => self.language.is_some(),
            "license" => self.license.is_some(),
            "license_url" => self.license_url.is_some(),
            "thumbnail" => self.thumbnail.is_some(),
            "preview" => self.preview.is_some(),
            "nsfw" => self.nsfw.is_some(),
            "fee" => self.fee.is_some(),
            "sources" => self.sources.is_some(),
            _ => false,
        }
    }
}

/// Optional publish arguments
///
/// Individual fields override the same field in the metadata argument.
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublishOptions {
    /// Local file to stream; its sd hash becomes the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Sources>,
    /// Publisher channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
}

impl PublishOptions {
    pub fn has(&self, field: &str) -> bool {
        match field {
            "file_path" => self.file_path.is_some(),
            "fee" => self.fee.is_some(),
            "title" => self.title.is_some(),
            "description" => self.description.is_some(),
            "author" => self.author.is_some(),
            "language" => self.language.is_some(),
            "license" => self.license.is_some(),
            "license_url" => self.license_url.is_some(),
            "thumbnail" => self.thumbnail.is_some(),
            "preview" => self.preview.is_some(),
            "nsfw" => self.nsfw.is_some(),
            "sources" => self.sources.is_some(),
            "channel_name" => self.channel_name.is_some(),
            _ => false,
        }
    }
}

/// publish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishRequest {
    pub name: String,
    pub bid: Amount,
    pub metadata: StreamMetadata,
    #[serde(flatten)]
    pub options: PublishOptions,
}

impl PublishRequest {
    /// First required field found neither in the options nor the metadata
    pub fn missing_required_field(&self) -> Option<&'static str> {
        REQUIRED_METADATA_FIELDS
            .iter()
            .copied()
            .find(|field| !self.options.has(field) && !self.metadata.has(field))
    }
}
