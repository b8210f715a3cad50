//! # API Client
//!
//! HTTP client for the ledger backend. All endpoint helpers funnel through
//! [`ApiClient::request`], which turns every kind of failure into one
//! [`RequestError`].

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::envelope::ApiEnvelope;
use shared::dto::{
    CancelTradeResponse, CheckIssuerRequest, CreateTradeRequest, CreateTradeResponse,
    CreateTrustlineRequest, CreateTrustlineResponse, HistoryEntry, IssuerCheck, LoginResponse,
    OpenOffer, SendPaymentResponse, SendTokenRequest, SendXrpRequest, TradeStatusResponse,
    WalletSummary,
};

use crate::core::config::DashboardConfig;
use crate::core::error::RequestError;
use crate::core::service::ApiService;

/// HTTP client for communicating with the backend API server.
///
/// Holds one connection pool for the whole session.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `config.api_url` with the configured request timeout.
    pub fn new(config: &DashboardConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET path?query`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError> {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }

    /// `POST path` with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Issue one request and decode the `{ success, data, error }` envelope.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let start = std::time::Instant::now();
        let url = format!("{}{}", self.base_url, path);

        let mut builder: RequestBuilder = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, error = %e, "Network error");
            RequestError::new(format!("Network error: {}", e))
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, status, error = %e, "Failed to read response body");
            RequestError::new(format!("Network error: {}", e)).with_status(status)
        })?;

        let result = decode_envelope(status, &bytes);
        let duration_ms = start.elapsed().as_millis();
        match &result {
            Ok(_) => tracing::debug!(method = %method, path = %path, status, duration_ms, "Request succeeded"),
            Err(e) => tracing::warn!(method = %method, path = %path, status, duration_ms, error = %e, "Request failed"),
        }
        result
    }
}

/// Decode a backend response body.
///
/// Non-2xx statuses and `success: false` are failures carrying the body's
/// `error` text, or the default message when the body has none (or is not
/// JSON at all). A successful envelope without `data` decodes as `{}` so that
/// payloads made only of optional fields still succeed.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, RequestError> {
    let envelope: Option<ApiEnvelope<serde_json::Value>> = serde_json::from_slice(body).ok();
    let is_http_success = (200..300).contains(&status);

    let envelope = match envelope {
        Some(envelope) if is_http_success && envelope.success => envelope,
        Some(envelope) => {
            return Err(RequestError::from_backend(envelope.error_message(), Some(status)));
        }
        None => return Err(RequestError::from_backend(None, Some(status))),
    };

    let data = envelope
        .data
        .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

    serde_json::from_value(data).map_err(|e| {
        RequestError::new(format!("Failed to parse response: {}", e)).with_status(status)
    })
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, RequestError> {
        crate::services::api::auth::login(self, username, password).await
    }

    async fn create_trade(&self, request: CreateTradeRequest) -> Result<CreateTradeResponse, RequestError> {
        crate::services::api::trade::create_trade(self, &request).await
    }

    async fn trade_status(&self, username: &str, offer_sequence: u64) -> Result<TradeStatusResponse, RequestError> {
        crate::services::api::trade::trade_status(self, username, offer_sequence).await
    }

    async fn cancel_trade(&self, username: &str, offer_sequence: u64) -> Result<CancelTradeResponse, RequestError> {
        crate::services::api::trade::cancel_trade(self, username, offer_sequence).await
    }

    async fn open_offers(&self, username: &str) -> Result<Vec<OpenOffer>, RequestError> {
        crate::services::api::trade::open_offers(self, username).await
    }

    async fn wallet_summary(&self, username: &str) -> Result<WalletSummary, RequestError> {
        crate::services::api::wallet::wallet_summary(self, username).await
    }

    async fn wallet_history(&self, username: &str) -> Result<Vec<HistoryEntry>, RequestError> {
        crate::services::api::wallet::wallet_history(self, username).await
    }

    async fn check_issuer(&self, request: CheckIssuerRequest) -> Result<IssuerCheck, RequestError> {
        crate::services::api::trustline::check_issuer(self, &request).await
    }

    async fn create_trustline(&self, request: CreateTrustlineRequest) -> Result<CreateTrustlineResponse, RequestError> {
        crate::services::api::trustline::create_trustline(self, &request).await
    }

    async fn send_xrp(&self, request: SendXrpRequest) -> Result<SendPaymentResponse, RequestError> {
        crate::services::api::payment::send_xrp(self, &request).await
    }

    async fn send_token(&self, request: SendTokenRequest) -> Result<SendPaymentResponse, RequestError> {
        crate::services::api::payment::send_token(self, &request).await
    }
}
