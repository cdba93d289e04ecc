// Publish call-site

use crate::client::LbryClient;
use crate::error::{LbryError, Result};
use crate::types::publish::PublishRequest;
use crate::types::{ClaimTransaction, IntoAmount, PublishOptions, StreamMetadata};
use tracing::info;

impl LbryClient {
    /// Make a new name claim and publish associated data
    ///
    /// Updates the existing claim if this wallet already claims `name`.
    /// `title`, `description`, `author`, `language`, `license` and `nsfw`
    /// must each be set in `options` or in `metadata`; individual options
    /// override the same metadata field on the daemon side.
    ///
    /// # Errors
    ///
    /// - LbryError::Validation naming the first missing required field,
    ///   before anything is sent
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lbry_sdk::{LbryClient, PublishOptions};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = LbryClient::connect("http://localhost:5279/lbryapi")?;
    /// let tx = client
    ///     .publish(
    ///         "hello-world",
    ///         0.5,
    ///         None,
    ///         PublishOptions {
    ///             file_path: Some("/tmp/hello.mp4".to_string()),
    ///             title: Some("Hello".to_string()),
    ///             description: Some("First upload".to_string()),
    ///             author: Some("me".to_string()),
    ///             language: Some("en".to_string()),
    ///             license: Some("Public Domain".to_string()),
    ///             nsfw: Some(false),
    ///             ..Default::default()
    ///         },
    ///     )
    ///     .await?;
    /// println!("claim {}", tx.claim_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn publish(
        &self,
        name: impl Into<String>,
        bid: impl IntoAmount,
        metadata: Option<StreamMetadata>,
        options: PublishOptions,
    ) -> Result<ClaimTransaction> {
        let mut metadata = metadata.unwrap_or_default();
        metadata.drop_shadowed_extra();

        let request = PublishRequest {
            name: name.into(),
            bid: bid.into_amount()?,
            metadata,
            options,
        };

        if let Some(field) = request.missing_required_field() {
            return Err(LbryError::Validation(format!(
                "{} is a required field for publishing. \
                 Please include it as an option or within metadata",
                field
            )));
        }

        let result: ClaimTransaction = self.call("publish", &request).await?;
        info!(
            name = %request.name,
            claim_id = %result.claim_id,
            txid = %result.txid,
            "Published"
        );

        Ok(result)
    }
}
