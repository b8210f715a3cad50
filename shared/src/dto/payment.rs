//! Direct payment DTOs.

use serde::{Deserialize, Serialize};

/// `POST /api/xrp/send`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendXrpRequest {
    pub username: String,
    pub destination: String,
    pub amount: String,
}

/// `POST /api/token/send`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendTokenRequest {
    pub username: String,
    pub destination: String,
    pub currency: String,
    pub issuer: String,
    pub amount: String,
}

/// Result of either send endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendPaymentResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
}
