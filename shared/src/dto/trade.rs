//! Swap offer DTOs: creation, status polling, cancellation and open offers.

use serde::{Deserialize, Serialize};

/// Lifecycle status reported by `/api/trade/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Submitted,
    Open,
    PartiallyFilled,
    Filled,
    Cancelled,
    Failed,
}

impl OfferStatus {
    /// Filled, cancelled and failed end the offer's life; polling must stop.
    pub fn is_terminal(self) -> bool {
        matches!(self, OfferStatus::Filled | OfferStatus::Cancelled | OfferStatus::Failed)
    }

    /// Wire name, e.g. `partially_filled`.
    pub fn as_str(self) -> &'static str {
        match self {
            OfferStatus::Submitted => "submitted",
            OfferStatus::Open => "open",
            OfferStatus::PartiallyFilled => "partially_filled",
            OfferStatus::Filled => "filled",
            OfferStatus::Cancelled => "cancelled",
            OfferStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency amount as the backend normalizes it.
///
/// XRP amounts carry an empty issuer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerAmount {
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default, deserialize_with = "crate::utils::de_decimal_string")]
    pub value: String,
}

impl LedgerAmount {
    /// Numeric value, `0.0` when the backend sent something unparseable.
    pub fn value_f64(&self) -> f64 {
        self.value.trim().parse().unwrap_or(0.0)
    }
}

/// `POST /api/trade/create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTradeRequest {
    pub username: String,
    pub give_currency: String,
    pub give_amount: String,
    pub want_currency: String,
    pub want_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub give_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub want_issuer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTradeResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Server-assigned offer sequence; `None` if the ledger result had none.
    #[serde(default)]
    pub offer_sequence: Option<u64>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    /// Set when the backend runs in demo mode and did not touch the ledger.
    #[serde(default)]
    pub simulated: bool,
}

/// `GET /api/trade/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeStatusResponse {
    pub status: OfferStatus,
    #[serde(default)]
    pub offer_sequence: Option<u64>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub last_ledger: Option<u64>,
}

/// `POST /api/trade/cancel`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelTradeRequest {
    pub username: String,
    pub offer_sequence: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelTradeResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// One entry of `GET /api/trade/open`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenOffer {
    pub offer_sequence: u64,
    pub sell: LedgerAmount,
    pub buy: LedgerAmount,
    pub status: OfferStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpenOffersResponse {
    #[serde(default)]
    pub offers: Vec<OpenOffer>,
}
