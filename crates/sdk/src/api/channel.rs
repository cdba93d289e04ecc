// Channel call-sites

use crate::client::LbryClient;
use crate::error::{LbryError, Result};
use crate::types::claim::{ChannelNewRequest, NestedClaimTransaction};
use crate::types::{ClaimSummary, IntoAmount};
use tracing::info;

/// Prefix `name` with `@` unless it already starts with one
pub fn normalize_channel_name(name: impl Into<String>) -> Result<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(LbryError::Validation(
            "channel name must not be empty".to_string(),
        ));
    }

    if name.starts_with('@') {
        Ok(name)
    } else {
        Ok(format!("@{}", name))
    }
}

impl LbryClient {
    /// List my channels
    pub async fn channel_list_mine(&self) -> Result<Vec<ClaimSummary>> {
        self.call("channel_list_mine", ()).await
    }

    /// Generate a publisher key and create a new certificate claim
    ///
    /// # Arguments
    ///
    /// * `name` - Channel name; `@` is prepended if missing
    /// * `amount` - Credits to claim the name with, coerced to a float
    ///
    /// Returns the claim ID of the new channel.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lbry_sdk::LbryClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = LbryClient::connect("http://localhost:5279/lbryapi")?;
    /// let claim_id = client.channel_new("mychannel", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn channel_new(
        &self,
        name: impl Into<String>,
        amount: impl IntoAmount,
    ) -> Result<String> {
        let request = ChannelNewRequest {
            channel_name: normalize_channel_name(name)?,
            amount: amount.into_amount()?,
        };

        let response: NestedClaimTransaction = self.call("channel_new", &request).await?;
        info!(
            channel = %request.channel_name,
            claim_id = %response.result.claim_id,
            "Channel created"
        );

        Ok(response.result.claim_id)
    }
}
