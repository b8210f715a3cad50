//! # Payment Endpoints
//!
//! Direct sends from the user's wallet. XRP and issued tokens use separate
//! endpoints; the backend refuses XRP on the token route.

use shared::dto::{SendPaymentResponse, SendTokenRequest, SendXrpRequest};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// Send XRP to `request.destination`.
#[tracing::instrument(skip(client, request), fields(destination = %request.destination, amount = %request.amount))]
pub async fn send_xrp(client: &ApiClient, request: &SendXrpRequest) -> Result<SendPaymentResponse, RequestError> {
    let response: SendPaymentResponse = client.post("/api/xrp/send", request).await?;
    tracing::info!(tx_hash = ?response.tx_hash, "XRP sent");
    Ok(response)
}

/// Send an issued token. The issuer is always required.
#[tracing::instrument(
    skip(client, request),
    fields(currency = %request.currency, destination = %request.destination, amount = %request.amount)
)]
pub async fn send_token(client: &ApiClient, request: &SendTokenRequest) -> Result<SendPaymentResponse, RequestError> {
    let response: SendPaymentResponse = client.post("/api/token/send", request).await?;
    tracing::info!(tx_hash = ?response.tx_hash, "Token sent");
    Ok(response)
}
