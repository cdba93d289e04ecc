//! LBRY Client Implementation

use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// LBRY daemon client
///
/// Every method issues exactly one request to the daemon. Nothing is cached
/// or retried between calls.
///
/// # Example
///
/// ```no_run
/// use lbry_sdk::LbryClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LbryClient::connect("http://localhost:5279/lbryapi")?;
/// let balance = client.wallet_balance(None, None).await?;
/// println!("{} LBC", balance);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LbryClient {
    dispatcher: Dispatcher,
}

impl LbryClient {
    /// Client for the daemon at `url`
    ///
    /// # Arguments
    ///
    /// * `url` - API endpoint URL (e.g., `http://localhost:5279/lbryapi`)
    pub fn connect(url: impl Into<String>) -> Result<Self> {
        Self::with_config(&ClientConfig::new(url))
    }

    /// Client for the default local daemon, honoring `LBRY_API_URL`
    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Client over a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport),
        }
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        self.dispatcher.endpoint()
    }

    /// Call any daemon method with typed params and result
    ///
    /// `params` must encode as a JSON object, or as `()` for none.
    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.dispatcher.call(method, params).await
    }

    /// Call any daemon method and return the untyped `result`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lbry_sdk::LbryClient;
    /// # use serde_json::json;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = LbryClient::connect("http://localhost:5279/lbryapi")?;
    /// let blobs = client.call_raw("blob_list", json!({"needed": true})).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call_raw(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.dispatcher.call_value(method, params).await
    }
}
