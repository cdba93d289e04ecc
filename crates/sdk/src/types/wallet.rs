//! Wallet and transaction types

use super::amount::Amount;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// wallet_balance
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalletBalanceRequest {
    /// Only this address's balance
    pub address: Option<String>,
    /// Only takes effect together with `address`
    pub include_unconfirmed: Option<bool>,
}

/// Requests keyed by a single address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressRequest {
    pub address: String,
}

/// send_amount_to_address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendAmountRequest {
    pub amount: Amount,
    /// Recipient, base58
    pub address: String,
}

/// transaction_show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionShowRequest {
    pub txid: String,
}

/// transaction_list entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionSummary {
    pub txid: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub confirmations: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// transaction_show result (JSON formatted transaction)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DecodedTransaction {
    pub fields: Map<String, Value>,
}

impl DecodedTransaction {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
