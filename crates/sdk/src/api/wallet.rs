// Wallet and transaction call-sites

use crate::client::LbryClient;
use crate::error::Result;
use crate::types::wallet::{
    AddressRequest, SendAmountRequest, TransactionShowRequest, WalletBalanceRequest,
};
use crate::types::{DecodedTransaction, IntoAmount, TransactionSummary};
use tracing::info;

impl LbryClient {
    /// Send credits to an address
    ///
    /// Returns true if the payment was scheduled.
    pub async fn send_amount_to_address(
        &self,
        amount: impl IntoAmount,
        address: impl Into<String>,
    ) -> Result<bool> {
        let request = SendAmountRequest {
            amount: amount.into_amount()?,
            address: address.into(),
        };
        let scheduled: bool = self.call("send_amount_to_address", &request).await?;
        info!(
            amount = %request.amount,
            address = %request.address,
            scheduled,
            "Payment requested"
        );

        Ok(scheduled)
    }

    /// Transactions belonging to the wallet
    pub async fn transaction_list(&self) -> Result<Vec<TransactionSummary>> {
        self.call("transaction_list", ()).await
    }

    /// Decoded transaction for `txid`
    pub async fn transaction_show(&self, txid: impl Into<String>) -> Result<DecodedTransaction> {
        let request = TransactionShowRequest { txid: txid.into() };
        self.call("transaction_show", request).await
    }

    /// Wallet balance in credits
    ///
    /// # Arguments
    ///
    /// * `address` - Only this address's balance
    /// * `include_unconfirmed` - Include unconfirmed funds; only takes effect
    ///   with `address`
    pub async fn wallet_balance(
        &self,
        address: Option<String>,
        include_unconfirmed: Option<bool>,
    ) -> Result<f64> {
        let request = WalletBalanceRequest {
            address,
            include_unconfirmed,
        };
        self.call("wallet_balance", request).await
    }

    /// True if `address` belongs to this wallet
    pub async fn wallet_is_address_mine(&self, address: impl Into<String>) -> Result<bool> {
        let request = AddressRequest {
            address: address.into(),
        };
        self.call("wallet_is_address_mine", request).await
    }

    /// Wallet addresses
    pub async fn wallet_list(&self) -> Result<Vec<String>> {
        self.call("wallet_list", ()).await
    }

    /// Generate a new base58 address
    pub async fn wallet_new_address(&self) -> Result<String> {
        self.call("wallet_new_address", ()).await
    }

    /// Public keys for an address; more than one if multisig
    pub async fn wallet_public_key(&self, address: impl Into<String>) -> Result<Vec<String>> {
        let request = AddressRequest {
            address: address.into(),
        };
        self.call("wallet_public_key", request).await
    }

    /// An address with no balance, created if none exists
    pub async fn wallet_unused_address(&self) -> Result<String> {
        self.call("wallet_unused_address", ()).await
    }
}
