//! # Authentication Endpoints

use shared::dto::{LoginRequest, LoginResponse};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// Login with username and password.
#[tracing::instrument(skip(client, password))]
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<LoginResponse, RequestError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = client.post("/api/auth/login", &request).await?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(response)
}
