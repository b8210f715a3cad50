//! # Wallet Query Endpoints
//!
//! Wallet summary (balances, trust lines, token registry) and ledger history.

use shared::dto::{HistoryEntry, HistoryResponse, WalletSummary};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// Get the wallet summary for a user.
pub async fn wallet_summary(client: &ApiClient, username: &str) -> Result<WalletSummary, RequestError> {
    client
        .get("/api/wallet/summary", &[("username", username.to_string())])
        .await
}

/// Get ledger transaction history for a user.
pub async fn wallet_history(client: &ApiClient, username: &str) -> Result<Vec<HistoryEntry>, RequestError> {
    client
        .get::<HistoryResponse>("/api/wallet/history", &[("username", username.to_string())])
        .await
        .map(|resp| resp.history)
}
