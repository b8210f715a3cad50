//! # Trust Line Endpoints
//!
//! Issuer risk check and trust line creation.

use shared::dto::{CheckIssuerRequest, CreateTrustlineRequest, CreateTrustlineResponse, IssuerCheck};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// Ask the backend how risky an issuer is for a currency.
#[tracing::instrument(skip(client, request), fields(currency = %request.currency))]
pub async fn check_issuer(client: &ApiClient, request: &CheckIssuerRequest) -> Result<IssuerCheck, RequestError> {
    let check: IssuerCheck = client.post("/api/trustline/check-issuer", request).await?;
    tracing::info!(risk = ?check.risk, valid = check.valid, blacklisted = check.blacklisted, "Issuer checked");
    Ok(check)
}

/// Create a trust line for `request.currency`.
#[tracing::instrument(skip(client, request), fields(currency = %request.currency, limit = %request.limit))]
pub async fn create_trustline(
    client: &ApiClient,
    request: &CreateTrustlineRequest,
) -> Result<CreateTrustlineResponse, RequestError> {
    let response: CreateTrustlineResponse = client.post("/api/trustline/create", request).await?;
    if let Some(warning) = &response.warning {
        tracing::warn!(warning = %warning, "Trust line created with warning");
    }
    Ok(response)
}
