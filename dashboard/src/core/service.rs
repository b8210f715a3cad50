//! # Service Traits
//!
//! The backend contract as a trait, so the trade controller and handlers can be
//! driven by the real [`ApiClient`](crate::services::api::ApiClient) or by a
//! mock in tests.

use async_trait::async_trait;
use shared::dto::{
    CancelTradeResponse, CheckIssuerRequest, CreateTradeRequest, CreateTradeResponse,
    CreateTrustlineRequest, CreateTrustlineResponse, HistoryEntry, IssuerCheck, LoginResponse,
    OpenOffer, SendPaymentResponse, SendTokenRequest, SendXrpRequest, TradeStatusResponse,
    WalletSummary,
};

use crate::core::error::RequestError;

/// Backend API operations.
///
/// Every failure, whatever its cause, comes back as a [`RequestError`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /api/auth/login`
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, RequestError>;

    /// `POST /api/trade/create`
    async fn create_trade(&self, request: CreateTradeRequest) -> Result<CreateTradeResponse, RequestError>;

    /// `GET /api/trade/status`
    async fn trade_status(&self, username: &str, offer_sequence: u64) -> Result<TradeStatusResponse, RequestError>;

    /// `POST /api/trade/cancel`
    async fn cancel_trade(&self, username: &str, offer_sequence: u64) -> Result<CancelTradeResponse, RequestError>;

    /// `GET /api/trade/open`
    async fn open_offers(&self, username: &str) -> Result<Vec<OpenOffer>, RequestError>;

    /// `GET /api/wallet/summary`
    async fn wallet_summary(&self, username: &str) -> Result<WalletSummary, RequestError>;

    /// `GET /api/wallet/history`
    async fn wallet_history(&self, username: &str) -> Result<Vec<HistoryEntry>, RequestError>;

    /// `POST /api/trustline/check-issuer`
    async fn check_issuer(&self, request: CheckIssuerRequest) -> Result<IssuerCheck, RequestError>;

    /// `POST /api/trustline/create`
    async fn create_trustline(&self, request: CreateTrustlineRequest) -> Result<CreateTrustlineResponse, RequestError>;

    /// `POST /api/xrp/send`
    async fn send_xrp(&self, request: SendXrpRequest) -> Result<SendPaymentResponse, RequestError>;

    /// `POST /api/token/send`
    async fn send_token(&self, request: SendTokenRequest) -> Result<SendPaymentResponse, RequestError>;
}
