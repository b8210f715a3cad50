//! Scripted [`ApiService`] for controller and handler tests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::{
    CancelTradeResponse, CheckIssuerRequest, CreateTradeRequest, CreateTradeResponse,
    CreateTrustlineRequest, CreateTrustlineResponse, HistoryEntry, IssuerCheck, IssuerRisk,
    LedgerAmount, LedgerMeta, LedgerTx, LoginResponse, OfferStatus, OpenOffer,
    SendPaymentResponse, SendTokenRequest, SendXrpRequest, TradeStatusResponse, TrustLine,
    WalletSummary,
};
use tokio::sync::Notify;

use crate::core::error::RequestError;
use crate::core::service::ApiService;

type Scripted<T> = Mutex<VecDeque<Result<T, RequestError>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub login: usize,
    pub create: usize,
    pub status: usize,
    pub cancel: usize,
    pub offers: usize,
    pub summary: usize,
    pub history: usize,
    pub check_issuer: usize,
    pub create_trustline: usize,
    pub send_xrp: usize,
    pub send_token: usize,
}

#[derive(Default)]
pub struct MockApi {
    counts: Mutex<CallCounts>,
    next_sequence: Mutex<u64>,
    create_results: Scripted<CreateTradeResponse>,
    status_results: Scripted<TradeStatusResponse>,
    cancel_results: Scripted<CancelTradeResponse>,
    issuer_results: Scripted<IssuerCheck>,
    send_results: Scripted<SendPaymentResponse>,
    created: Mutex<Vec<CreateTradeRequest>>,
    polled: Mutex<Vec<u64>>,
    trustlines: Mutex<Vec<TrustLine>>,
    created_trustlines: Mutex<Vec<CreateTrustlineRequest>>,
    sent_xrp: Mutex<Vec<SendXrpRequest>>,
    sent_tokens: Mutex<Vec<SendTokenRequest>>,
    summary_error: Mutex<Option<RequestError>>,
    history_error: Mutex<Option<RequestError>>,
    create_gate: Mutex<Option<Arc<Notify>>>,
    status_gate: Mutex<Option<Arc<Notify>>>,
    cancel_gate: Mutex<Option<Arc<Notify>>>,
}

impl MockApi {
    pub const ADDRESS: &'static str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    pub const USD_ISSUER: &'static str = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B";

    pub fn new() -> Self {
        let mock = Self::default();
        *mock.next_sequence.lock() = 42;
        mock
    }

    pub fn counts(&self) -> CallCounts {
        *self.counts.lock()
    }

    pub fn script_create(&self, result: Result<CreateTradeResponse, RequestError>) {
        self.create_results.lock().push_back(result);
    }

    pub fn script_status(&self, result: Result<TradeStatusResponse, RequestError>) {
        self.status_results.lock().push_back(result);
    }

    pub fn script_cancel(&self, result: Result<CancelTradeResponse, RequestError>) {
        self.cancel_results.lock().push_back(result);
    }

    pub fn script_issuer(&self, result: Result<IssuerCheck, RequestError>) {
        self.issuer_results.lock().push_back(result);
    }

    /// Result for the next `send_xrp` or `send_token` call.
    pub fn script_send(&self, result: Result<SendPaymentResponse, RequestError>) {
        self.send_results.lock().push_back(result);
    }

    pub fn set_trustlines(&self, lines: Vec<TrustLine>) {
        *self.trustlines.lock() = lines;
    }

    pub fn fail_summary(&self, error: RequestError) {
        *self.summary_error.lock() = Some(error);
    }

    pub fn fail_history(&self, error: RequestError) {
        *self.history_error.lock() = Some(error);
    }

    /// Hold every create request until the returned `Notify` is signalled.
    pub fn gate_create(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.create_gate.lock() = Some(gate.clone());
        gate
    }

    /// Hold every status request until the returned `Notify` is signalled.
    pub fn gate_status(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.status_gate.lock() = Some(gate.clone());
        gate
    }

    /// Hold every cancel request until the returned `Notify` is signalled.
    pub fn gate_cancel(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.cancel_gate.lock() = Some(gate.clone());
        gate
    }

    pub fn ungate_status(&self) {
        *self.status_gate.lock() = None;
    }

    pub fn created(&self) -> Vec<CreateTradeRequest> {
        self.created.lock().clone()
    }

    /// Offer sequences passed to `trade_status`, in call order.
    pub fn polled(&self) -> Vec<u64> {
        self.polled.lock().clone()
    }

    pub fn created_trustlines(&self) -> Vec<CreateTrustlineRequest> {
        self.created_trustlines.lock().clone()
    }

    pub fn sent_xrp(&self) -> Vec<SendXrpRequest> {
        self.sent_xrp.lock().clone()
    }

    pub fn sent_tokens(&self) -> Vec<SendTokenRequest> {
        self.sent_tokens.lock().clone()
    }

    fn next_send_result(&self) -> Result<SendPaymentResponse, RequestError> {
        let scripted = self.send_results.lock().pop_front();
        scripted.unwrap_or_else(|| {
            Ok(SendPaymentResponse {
                message: Some("Sent successfully".to_string()),
                tx_hash: Some("SEND".to_string()),
            })
        })
    }

    pub fn status(status: OfferStatus, tx_hash: Option<&str>) -> TradeStatusResponse {
        TradeStatusResponse {
            status,
            offer_sequence: None,
            tx_hash: tx_hash.map(str::to_string),
            last_ledger: Some(1000),
        }
    }

    pub fn created_offer(sequence: u64, tx_hash: &str) -> CreateTradeResponse {
        CreateTradeResponse {
            message: Some("Offer created".to_string()),
            offer_sequence: Some(sequence),
            tx_hash: Some(tx_hash.to_string()),
            simulated: false,
        }
    }

    pub fn usd_line() -> TrustLine {
        TrustLine {
            currency: "USD".to_string(),
            issuer: Self::USD_ISSUER.to_string(),
            balance: "0".to_string(),
            limit: "1000000".to_string(),
        }
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, RequestError> {
        self.counts.lock().login += 1;
        if password == "wrong" {
            return Err(RequestError::new("Invalid username or password").with_status(401));
        }
        Ok(LoginResponse {
            username: shared::normalize_username(username),
            message: "Login successful".to_string(),
        })
    }

    async fn create_trade(&self, request: CreateTradeRequest) -> Result<CreateTradeResponse, RequestError> {
        self.counts.lock().create += 1;
        self.created.lock().push(request);

        let gate = self.create_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let scripted = self.create_results.lock().pop_front();
        scripted.unwrap_or_else(|| {
            let mut next = self.next_sequence.lock();
            let sequence = *next;
            *next += 1;
            Ok(Self::created_offer(sequence, &format!("CREATE{}", sequence)))
        })
    }

    async fn trade_status(&self, _username: &str, offer_sequence: u64) -> Result<TradeStatusResponse, RequestError> {
        self.counts.lock().status += 1;
        self.polled.lock().push(offer_sequence);

        let gate = self.status_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let scripted = self.status_results.lock().pop_front();
        scripted.unwrap_or_else(|| Ok(Self::status(OfferStatus::Open, None)))
    }

    async fn cancel_trade(&self, _username: &str, _offer_sequence: u64) -> Result<CancelTradeResponse, RequestError> {
        self.counts.lock().cancel += 1;

        let gate = self.cancel_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let scripted = self.cancel_results.lock().pop_front();
        scripted.unwrap_or_else(|| {
            Ok(CancelTradeResponse {
                message: Some("Offer cancelled".to_string()),
                tx_hash: Some("CANCEL".to_string()),
            })
        })
    }

    async fn open_offers(&self, _username: &str) -> Result<Vec<OpenOffer>, RequestError> {
        self.counts.lock().offers += 1;
        Ok(vec![OpenOffer {
            offer_sequence: 7,
            sell: LedgerAmount {
                currency: "XRP".to_string(),
                issuer: String::new(),
                value: "10".to_string(),
            },
            buy: LedgerAmount {
                currency: "USD".to_string(),
                issuer: Self::USD_ISSUER.to_string(),
                value: "25".to_string(),
            },
            status: OfferStatus::Open,
        }])
    }

    async fn wallet_summary(&self, username: &str) -> Result<WalletSummary, RequestError> {
        self.counts.lock().summary += 1;
        if let Some(error) = self.summary_error.lock().clone() {
            return Err(error);
        }

        let trustlines = self.trustlines.lock().clone();
        let mut token_registry = BTreeMap::new();
        token_registry.insert("USD".to_string(), Self::USD_ISSUER.to_string());

        Ok(WalletSummary {
            username: username.to_string(),
            address: Self::ADDRESS.to_string(),
            phone: Some("+15550100".to_string()),
            xrp_balance: 1250.5,
            token_balances: trustlines.clone(),
            trustlines,
            open_offers_count: 1,
            token_registry,
        })
    }

    async fn wallet_history(&self, _username: &str) -> Result<Vec<HistoryEntry>, RequestError> {
        self.counts.lock().history += 1;
        if let Some(error) = self.history_error.lock().clone() {
            return Err(error);
        }
        Ok(vec![HistoryEntry {
            tx: LedgerTx {
                transaction_type: "OfferCreate".to_string(),
                account: Self::ADDRESS.to_string(),
                destination: None,
                hash: "HIST1".to_string(),
                date: Some(0),
            },
            meta: LedgerMeta {
                transaction_result: "tesSUCCESS".to_string(),
            },
        }])
    }

    async fn check_issuer(&self, _request: CheckIssuerRequest) -> Result<IssuerCheck, RequestError> {
        self.counts.lock().check_issuer += 1;
        let scripted = self.issuer_results.lock().pop_front();
        scripted.unwrap_or_else(|| {
            Ok(IssuerCheck {
                valid: true,
                blacklisted: false,
                age_months: 24,
                issues_currency: true,
                risk: IssuerRisk::Low,
            })
        })
    }

    async fn create_trustline(&self, request: CreateTrustlineRequest) -> Result<CreateTrustlineResponse, RequestError> {
        self.counts.lock().create_trustline += 1;
        self.trustlines.lock().push(TrustLine {
            currency: request.currency.clone(),
            issuer: request.issuer.clone().unwrap_or_default(),
            balance: "0".to_string(),
            limit: request.limit.clone(),
        });
        self.created_trustlines.lock().push(request);
        Ok(CreateTrustlineResponse {
            message: Some("Trust line created".to_string()),
            warning: None,
        })
    }

    async fn send_xrp(&self, request: SendXrpRequest) -> Result<SendPaymentResponse, RequestError> {
        self.counts.lock().send_xrp += 1;
        self.sent_xrp.lock().push(request);
        self.next_send_result()
    }

    async fn send_token(&self, request: SendTokenRequest) -> Result<SendPaymentResponse, RequestError> {
        self.counts.lock().send_token += 1;
        self.sent_tokens.lock().push(request);
        self.next_send_result()
    }
}
