//! File manager types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filters for file_list
///
/// Only the filters that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_hash: Option<String>,
    /// Name in the downloads folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outpoint: Option<String>,
    /// Internal row id in the file manager
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rowid: Option<i64>,
    /// Populate `message` and `total_bytes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_status: Option<bool>,
}

impl FileListOptions {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_sd_hash(sd_hash: impl Into<String>) -> Self {
        Self {
            sd_hash: Some(sd_hash.into()),
            ..Default::default()
        }
    }

    pub fn full_status(mut self, full_status: bool) -> Self {
        self.full_status = Some(full_status);
        self
    }
}

/// file_delete
///
/// Every selector is sent; unset ones as `null`. `delete_target_file`
/// defaults to true on the daemon; false keeps the file and only drops
/// blobs and db entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileDeleteRequest {
    pub name: Option<String>,
    pub sd_hash: Option<String>,
    pub file_name: Option<String>,
    pub stream_hash: Option<String>,
    pub claim_id: Option<String>,
    pub outpoint: Option<String>,
    pub rowid: Option<i64>,
    pub delete_target_file: Option<bool>,
}

impl FileDeleteRequest {
    pub fn by_claim_id(claim_id: impl Into<String>) -> Self {
        Self {
            claim_id: Some(claim_id.into()),
            ..Default::default()
        }
    }

    pub fn by_sd_hash(sd_hash: impl Into<String>) -> Self {
        Self {
            sd_hash: Some(sd_hash.into()),
            ..Default::default()
        }
    }

    pub fn keep_target_file(mut self) -> Self {
        self.delete_target_file = Some(false);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Start,
    Stop,
}

/// file_set_status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSetStatusRequest {
    pub status: FileStatus,
    pub name: Option<String>,
    pub sd_hash: Option<String>,
    pub file_name: Option<String>,
}

/// A managed file (file_list entry, get result)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileInfo {
    pub completed: bool,
    pub file_name: String,
    pub download_directory: String,
    #[serde(default)]
    pub points_paid: f64,
    pub stopped: bool,
    pub stream_hash: String,
    #[serde(default)]
    pub stream_name: Option<String>,
    #[serde(default)]
    pub suggested_file_name: Option<String>,
    pub sd_hash: String,
    /// Name claim attached to the file
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub outpoint: Option<String>,
    #[serde(default)]
    pub claim_id: Option<String>,
    pub download_path: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    /// `None` unless full_status was requested
    #[serde(default)]
    pub total_bytes: Option<u64>,
    #[serde(default)]
    pub written_bytes: Option<u64>,
    /// `None` unless full_status was requested
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_omit_unset() {
        let opts = FileListOptions::by_name("hello").full_status(true);
        assert_eq!(
            serde_json::to_value(opts).unwrap(),
            json!({"name": "hello", "full_status": true})
        );
        assert_eq!(
            serde_json::to_value(FileListOptions::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_delete_request_sends_every_selector() {
        let req = FileDeleteRequest::by_claim_id("abc").keep_target_file();
        let value = serde_json::to_value(&req).unwrap();
        let params = value.as_object().unwrap();
        assert_eq!(params.len(), 8);
        assert_eq!(params["claim_id"], json!("abc"));
        assert_eq!(params["delete_target_file"], json!(false));
        assert_eq!(params["sd_hash"], json!(null));
    }

    #[test]
    fn test_status_is_lowercase() {
        assert_eq!(serde_json::to_value(FileStatus::Stop).unwrap(), json!("stop"));
    }
}
