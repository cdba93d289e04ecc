//! Daemon status and settings types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusRequest {
    pub session_status: bool,
}

/// Daemon status dictionary
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DaemonStatus {
    #[serde(default)]
    pub lbry_id: Option<String>,
    #[serde(default)]
    pub installation_id: Option<String>,
    #[serde(default)]
    pub is_running: Option<bool>,
    #[serde(default)]
    pub is_first_run: Option<bool>,
    #[serde(default)]
    pub startup_status: Option<Value>,
    #[serde(default)]
    pub connection_status: Option<Value>,
    #[serde(default)]
    pub blockchain_status: Option<Value>,
    /// Only present when requested
    #[serde(default)]
    pub session_status: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Daemon settings (settings_get / settings_set result)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DaemonSettings {
    #[serde(default)]
    pub run_on_startup: Option<bool>,
    #[serde(default)]
    pub data_rate: Option<f64>,
    #[serde(default)]
    pub max_key_fee: Option<Value>,
    #[serde(default)]
    pub disable_max_key_fee: Option<bool>,
    #[serde(default)]
    pub download_directory: Option<String>,
    #[serde(default)]
    pub peer_port: Option<u16>,
    #[serde(default)]
    pub max_upload: Option<f64>,
    #[serde(default)]
    pub max_download: Option<f64>,
    #[serde(default)]
    pub download_timeout: Option<u64>,
    #[serde(default)]
    pub search_timeout: Option<f64>,
    #[serde(default)]
    pub cache_time: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// settings_set
///
/// Only the settings that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsUpdate {
    /// Not supported by the daemon yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_startup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_key_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_max_key_fee: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_port: Option<u16>,
    /// Not supported by the daemon yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_upload: Option<f64>,
    /// Not supported by the daemon yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_download: Option<f64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_timeout: Option<u64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_timeout: Option<f64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u64>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
