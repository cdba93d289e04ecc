// Claim and support call-sites

use crate::client::LbryClient;
use crate::error::Result;
use crate::types::claim::{
    ClaimAbandonRequest, ClaimListRequest, ClaimNewSupportRequest, ClaimShowRequest,
};
use crate::types::{
    AbandonResult, ClaimInfo, ClaimsForName, IntoAmount, OwnedClaim, SupportResult,
};
use serde_json::Value;
use tracing::info;

impl LbryClient {
    /// Abandon a claim and reclaim its credits
    pub async fn claim_abandon(&self, claim_id: impl Into<String>) -> Result<AbandonResult> {
        let request = ClaimAbandonRequest {
            claim_id: claim_id.into(),
        };
        let result: AbandonResult = self.call("claim_abandon", &request).await?;
        info!(
            claim_id = %request.claim_id,
            txid = %result.txid,
            fee = result.fee,
            "Claim abandoned"
        );

        Ok(result)
    }

    /// Claims and supports for a name
    pub async fn claim_list(&self, name: impl Into<String>) -> Result<ClaimsForName> {
        let request = ClaimListRequest { name: name.into() };
        self.call("claim_list", request).await
    }

    /// Name claims owned by this wallet
    pub async fn claim_list_mine(&self) -> Result<Vec<OwnedClaim>> {
        self.call("claim_list_mine", ()).await
    }

    /// Support a claim
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the claim
    /// * `claim_id` - Claim to support
    /// * `amount` - Credits to add, coerced to a float (`"5"` becomes `5.0`)
    pub async fn claim_new_support(
        &self,
        name: impl Into<String>,
        claim_id: impl Into<String>,
        amount: impl IntoAmount,
    ) -> Result<SupportResult> {
        let request = ClaimNewSupportRequest {
            name: name.into(),
            claim_id: claim_id.into(),
            amount: amount.into_amount()?,
        };
        self.call("claim_new_support", request).await
    }

    /// Resolve claim info for a name
    ///
    /// `txid`, `nout` and `claim_id` narrow the lookup. Returns `None` when
    /// the daemon reports the claim as not resolvable.
    pub async fn claim_show(
        &self,
        name: impl Into<String>,
        txid: Option<String>,
        nout: Option<u32>,
        claim_id: Option<String>,
    ) -> Result<Option<ClaimInfo>> {
        let request = ClaimShowRequest {
            name: name.into(),
            txid,
            nout,
            claim_id,
        };

        match self.call::<_, Value>("claim_show", request).await? {
            Value::Null | Value::Bool(false) => Ok(None),
            value => Ok(Some(serde_json::from_value(value)?)),
        }
    }
}
