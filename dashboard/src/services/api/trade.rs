//! # Trade Endpoints
//!
//! Swap offer creation, status polling, cancellation and the open-offer list.

use shared::dto::{
    CancelTradeRequest, CancelTradeResponse, CreateTradeRequest, CreateTradeResponse, OpenOffer,
    OpenOffersResponse, TradeStatusResponse,
};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// Submit a new swap offer.
#[tracing::instrument(skip(client, request), fields(
    username = %request.username,
    give = %request.give_currency,
    want = %request.want_currency,
))]
pub async fn create_trade(
    client: &ApiClient,
    request: &CreateTradeRequest,
) -> Result<CreateTradeResponse, RequestError> {
    tracing::info!(
        give_amount = %request.give_amount,
        want_amount = %request.want_amount,
        "Creating swap offer"
    );

    let response: CreateTradeResponse = client.post("/api/trade/create", request).await?;

    tracing::info!(
        offer_sequence = ?response.offer_sequence,
        tx_hash = ?response.tx_hash,
        simulated = response.simulated,
        "Swap offer created"
    );
    Ok(response)
}

/// Fetch the current status of one offer.
#[tracing::instrument(skip(client), level = "debug")]
pub async fn trade_status(
    client: &ApiClient,
    username: &str,
    offer_sequence: u64,
) -> Result<TradeStatusResponse, RequestError> {
    client
        .get(
            "/api/trade/status",
            &[
                ("username", username.to_string()),
                ("offer_sequence", offer_sequence.to_string()),
            ],
        )
        .await
}

/// Cancel an offer on the ledger.
#[tracing::instrument(skip(client))]
pub async fn cancel_trade(
    client: &ApiClient,
    username: &str,
    offer_sequence: u64,
) -> Result<CancelTradeResponse, RequestError> {
    let request = CancelTradeRequest {
        username: username.to_string(),
        offer_sequence,
    };
    let response: CancelTradeResponse = client.post("/api/trade/cancel", &request).await?;
    tracing::info!(tx_hash = ?response.tx_hash, "Offer cancelled");
    Ok(response)
}

/// List the account's standing offers.
pub async fn open_offers(client: &ApiClient, username: &str) -> Result<Vec<OpenOffer>, RequestError> {
    client
        .get::<OpenOffersResponse>("/api/trade/open", &[("username", username.to_string())])
        .await
        .map(|resp| resp.offers)
}
