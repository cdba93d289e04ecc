// Stream, blob and resolution call-sites

use crate::client::LbryClient;
use crate::error::Result;
use crate::types::stream::{
    DescriptorGetRequest, GetAvailabilityRequest, GetRequest, PeerListRequest, ReflectRequest,
    ResolveNameRequest, ResolveRequest, StreamCostEstimateRequest,
};
use crate::types::{
    DescriptorResult, FileInfo, GetOptions, PaymentRateManager, PeerContact, ResolvedUri,
    StreamMetadata,
};

impl LbryClient {
    /// Download and return an sd blob
    ///
    /// # Arguments
    ///
    /// * `sd_hash` - Hash of the sd blob
    /// * `timeout` - Timeout in seconds, enforced by the daemon
    /// * `payment_rate_manager` - `None` for the daemon default
    pub async fn descriptor_get(
        &self,
        sd_hash: impl Into<String>,
        timeout: Option<u64>,
        payment_rate_manager: Option<PaymentRateManager>,
    ) -> Result<DescriptorResult> {
        let request = DescriptorGetRequest {
            sd_hash: sd_hash.into(),
            timeout,
            payment_rate_manager,
        };
        self.call("descriptor_get", request).await
    }

    /// Download a stream from an LBRY URI
    pub async fn get(&self, uri: impl Into<String>, options: GetOptions) -> Result<FileInfo> {
        let request = GetRequest {
            uri: uri.into(),
            options,
        };
        self.call("get", request).await
    }

    /// Stream availability as peers per blob over total blobs
    pub async fn get_availability(
        &self,
        uri: impl Into<String>,
        sd_timeout: Option<u64>,
        peer_timeout: Option<u64>,
    ) -> Result<f64> {
        let request = GetAvailabilityRequest {
            uri: uri.into(),
            sd_timeout,
            peer_timeout,
        };
        self.call("get_availability", request).await
    }

    /// Peers holding a blob
    pub async fn peer_list(
        &self,
        blob_hash: impl Into<String>,
        timeout: Option<u64>,
    ) -> Result<Vec<PeerContact>> {
        let request = PeerListRequest {
            blob_hash: blob_hash.into(),
            timeout,
        };
        self.call("peer_list", request).await
    }

    /// Reflect a stream; true if successful
    pub async fn reflect(&self, sd_hash: impl Into<String>) -> Result<bool> {
        let request = ReflectRequest {
            sd_hash: sd_hash.into(),
        };
        self.call("reflect", request).await
    }

    /// Resolve an LBRY URI; `None` if nothing resolves
    pub async fn resolve(&self, uri: impl Into<String>) -> Result<Option<ResolvedUri>> {
        let request = ResolveRequest { uri: uri.into() };
        self.call("resolve", request).await
    }

    /// Metadata from a name claim; `None` if the name is not resolvable
    ///
    /// `name` must not include the `lbry://` prefix.
    pub async fn resolve_name(&self, name: impl Into<String>) -> Result<Option<StreamMetadata>> {
        let request = ResolveNameRequest { name: name.into() };
        self.call("resolve_name", request).await
    }

    /// Estimated cost in credits; `None` if the name is not resolvable
    ///
    /// Giving `size` avoids downloading the sd blob.
    pub async fn stream_cost_estimate(
        &self,
        name: impl Into<String>,
        size: Option<u64>,
    ) -> Result<Option<f64>> {
        let request = StreamCostEstimateRequest {
            name: name.into(),
            size,
        };
        self.call("stream_cost_estimate", request).await
    }
}
