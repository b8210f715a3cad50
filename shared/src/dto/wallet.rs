//! Wallet summary and ledger history DTOs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trust line as normalized by `/api/wallet/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrustLine {
    pub currency: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default, deserialize_with = "crate::utils::de_decimal_string")]
    pub balance: String,
    #[serde(default, deserialize_with = "crate::utils::de_decimal_string")]
    pub limit: String,
}

/// Issued-token balance. Same shape as a trust line on the wire.
pub type TokenBalance = TrustLine;

/// `GET /api/wallet/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WalletSummary {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::de_f64_lenient")]
    pub xrp_balance: f64,
    #[serde(default)]
    pub token_balances: Vec<TokenBalance>,
    #[serde(default)]
    pub trustlines: Vec<TrustLine>,
    #[serde(default)]
    pub open_offers_count: usize,
    /// Default issuer per currency code.
    #[serde(default)]
    pub token_registry: BTreeMap<String, String>,
}

/// Ledger transaction fields the dashboard displays.
///
/// Field names follow the ledger's own JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerTx {
    #[serde(rename = "TransactionType", default)]
    pub transaction_type: String,
    #[serde(rename = "Account", default)]
    pub account: String,
    #[serde(rename = "Destination", default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default)]
    pub hash: String,
    /// Seconds since the ledger epoch (2000-01-01T00:00:00Z).
    #[serde(default)]
    pub date: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerMeta {
    #[serde(rename = "TransactionResult", default)]
    pub transaction_result: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub tx: LedgerTx,
    #[serde(default)]
    pub meta: LedgerMeta,
}

/// `GET /api/wallet/history`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}
