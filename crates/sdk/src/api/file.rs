// File manager call-sites

use crate::client::LbryClient;
use crate::error::Result;
use crate::types::file::FileSetStatusRequest;
use crate::types::{FileDeleteRequest, FileInfo, FileListOptions, FileStatus};
use tracing::info;

impl LbryClient {
    /// Delete a file
    ///
    /// Returns true if the daemon deleted it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lbry_sdk::{FileDeleteRequest, LbryClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = LbryClient::connect("http://localhost:5279/lbryapi")?;
    /// let deleted = client
    ///     .file_delete(FileDeleteRequest::by_claim_id("f9b4f3e6").keep_target_file())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn file_delete(&self, request: FileDeleteRequest) -> Result<bool> {
        let deleted: bool = self.call("file_delete", &request).await?;
        if deleted {
            info!(?request, "File deleted");
        }

        Ok(deleted)
    }

    /// List files matching the set filters
    pub async fn file_list(&self, options: FileListOptions) -> Result<Vec<FileInfo>> {
        self.call("file_list", options).await
    }

    /// Start or stop downloading a file
    ///
    /// Returns the daemon's confirmation message.
    pub async fn file_set_status(
        &self,
        status: FileStatus,
        name: Option<String>,
        sd_hash: Option<String>,
        file_name: Option<String>,
    ) -> Result<String> {
        let request = FileSetStatusRequest {
            status,
            name,
            sd_hash,
            file_name,
        };
        self.call("file_set_status", request).await
    }
}
