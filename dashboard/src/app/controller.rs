//! # Trade Lifecycle Controller
//!
//! Owns the create → poll → resolve state machine for the single active trade.
//!
//! ```text
//!            create_trade             offer_sequence
//!   Idle ───────────────▶ Submitting ───────────────▶ Polling ◀──────┐
//!    ▲                        │ error                  │  │          │ open
//!    │◀───────────────────────┘                        │  ▼          │
//!    │                                                 │ PartiallyFilled
//!    │  filled / cancelled / failed / cancel_trade      │  │
//!    └─────────────────────────────────────────────────┴──┘
//! ```
//!
//! The controller depends only on [`ApiService`] and [`StateStore`]; it never
//! renders.
//!
//! ## Staleness
//!
//! Every start or stop bumps a generation counter. A poll tick records the
//! generation it ran for and, after its request returns, drops the result
//! unless that generation is still current *and* the store's active trade is
//! still the sequence it polled.
//!
//! ## Locking
//!
//! `inner` is always taken before any store lock and never held across an
//! `.await`.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use shared::dto::{CreateTradeRequest, OfferStatus, TradeStatusResponse};
use shared::{is_native_currency, normalize_currency};

use crate::app::gate::requires_trustline;
use crate::app::progress::{exchange_rate, progress_for};
use crate::app::state::{
    ActiveTrade, MatchDetails, Screen, StatusMessage, TradeConfirmation, TradeOutcome, TradePhase,
};
use crate::app::store::{StateStore, TradeResolution};
use crate::app::tasks::poll::{spawn_poll_loop, PollCounters, PollHandle, PollOutcome};
use crate::app::tasks::refresh::{refresh_all, RefreshReport};
use crate::core::error::{AppError, RequestError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::{validate_amount, validate_currency_code};

/// User input for a new trade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeForm {
    pub give_currency: String,
    pub give_amount: String,
    pub want_currency: String,
    pub want_amount: String,
    pub give_issuer: Option<String>,
    pub want_issuer: Option<String>,
}

impl TradeForm {
    pub fn new(
        give_amount: impl Into<String>,
        give_currency: impl Into<String>,
        want_amount: impl Into<String>,
        want_currency: impl Into<String>,
    ) -> Self {
        Self {
            give_currency: give_currency.into(),
            give_amount: give_amount.into(),
            want_currency: want_currency.into(),
            want_amount: want_amount.into(),
            give_issuer: None,
            want_issuer: None,
        }
    }

    /// Field checks only; no state is consulted.
    pub fn validate(&self) -> Result<()> {
        validate_currency_code(&self.give_currency, "Give").into_result()?;
        validate_amount(&self.give_amount, "Give").into_result()?;
        validate_currency_code(&self.want_currency, "Want").into_result()?;
        validate_amount(&self.want_amount, "Want").into_result()?;

        if normalize_currency(&self.give_currency) == normalize_currency(&self.want_currency) {
            return Err(AppError::Validation(
                "Give and want currencies must differ".to_string(),
            ));
        }
        Ok(())
    }
}

struct ControllerInner {
    phase: TradePhase,
    generation: u64,
    poll: Option<PollHandle>,
}

struct Shared {
    api: Arc<dyn ApiService>,
    store: StateStore,
    poll_interval: Duration,
    counters: Arc<PollCounters>,
    inner: Mutex<ControllerInner>,
}

/// Cloneable handle; all clones drive the same state machine.
#[derive(Clone)]
pub struct TradeController {
    shared: Arc<Shared>,
}

impl TradeController {
    pub fn new(api: Arc<dyn ApiService>, store: StateStore, poll_interval: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                api,
                store,
                poll_interval,
                counters: Arc::new(PollCounters::default()),
                inner: Mutex::new(ControllerInner {
                    phase: TradePhase::Idle,
                    generation: 0,
                    poll: None,
                }),
            }),
        }
    }

    pub fn phase(&self) -> TradePhase {
        self.shared.inner.lock().phase
    }

    /// Whether the controller currently holds a poll handle.
    pub fn has_live_poll(&self) -> bool {
        self.shared.inner.lock().poll.is_some()
    }

    /// Poll loops started and not yet stopped.
    pub fn live_poll_loops(&self) -> usize {
        self.shared.counters.live()
    }

    /// Poll loops started over the controller's lifetime.
    pub fn poll_loops_started(&self) -> usize {
        self.shared.counters.started()
    }

    pub fn store(&self) -> &StateStore {
        &self.shared.store
    }

    fn username(&self) -> Result<String> {
        self.shared
            .store
            .read(|state| state.username.clone())
            .ok_or_else(|| AppError::State("Not logged in".to_string()))
    }

    /// Submit a new trade and start polling it.
    ///
    /// A trade that is still being polled is stopped and discarded first.
    #[tracing::instrument(skip(self, form), fields(give = %form.give_currency, want = %form.want_currency))]
    pub async fn create_trade(&self, form: TradeForm) -> Result<ActiveTrade> {
        form.validate()?;
        let username = self.username()?;
        let request = self.build_request(&username, &form)?;
        let store = &self.shared.store;

        let generation = {
            let mut inner = self.shared.inner.lock();
            if inner.phase == TradePhase::Submitting {
                return Err(AppError::State(
                    "Trade submission already in progress".to_string(),
                ));
            }
            if inner.phase.is_polling() || inner.poll.is_some() {
                tracing::info!("Replacing active trade with a new submission");
                self.stop_locked(&mut inner);
                store.clear_active_trade();
            }
            inner.generation += 1;
            inner.phase = TradePhase::Submitting;
            inner.generation
        };

        store.set_submit_enabled(false);
        store.set_status_message(Some(StatusMessage::info("Submitting trade...")));
        tracing::info!(generation, "Trade submission started");

        let result = self.shared.api.create_trade(request.clone()).await;

        let mut inner = self.shared.inner.lock();
        if inner.generation != generation || inner.phase != TradePhase::Submitting {
            tracing::debug!(generation, current = inner.generation, "Discarding superseded create result");
            return Err(AppError::State(
                "Trade submission was superseded".to_string(),
            ));
        }

        let response = result.and_then(|response| {
            response
                .offer_sequence
                .map(|sequence| (sequence, response.tx_hash))
                .ok_or_else(|| RequestError::new("Backend did not return an offer sequence"))
        });

        let (offer_sequence, tx_hash) = match response {
            Ok(created) => created,
            Err(e) => {
                inner.phase = TradePhase::Idle;
                drop(inner);
                tracing::warn!(error = %e, "Trade submission failed");
                store.set_submit_enabled(true);
                store.set_status_message(Some(StatusMessage::error(format!(
                    "Trade failed: {}",
                    e.message
                ))));
                return Err(e.into());
            }
        };

        let trade = ActiveTrade {
            offer_sequence,
            tx_hash,
            give_currency: request.give_currency,
            give_amount: request.give_amount,
            want_currency: request.want_currency,
            want_amount: request.want_amount,
            status: OfferStatus::Submitted,
        };

        store.set_active_trade(trade.clone());
        store.set_submit_enabled(true);
        store.navigate(Screen::Trade);
        store.set_status_message(Some(StatusMessage::success(format!(
            "Offer #{} submitted",
            offer_sequence
        ))));

        inner.phase = TradePhase::Polling;
        inner.poll = Some(self.spawn_poll(generation, offer_sequence));
        tracing::info!(generation, offer_sequence, "Trade submitted, polling");

        Ok(trade)
    }

    fn build_request(&self, username: &str, form: &TradeForm) -> Result<CreateTradeRequest> {
        let give_currency = normalize_currency(&form.give_currency);
        let want_currency = normalize_currency(&form.want_currency);

        let (gated, give_issuer, want_issuer) = self.shared.store.read(|state| {
            let gated = state.wallet.as_ref().and_then(|wallet| {
                [&give_currency, &want_currency]
                    .into_iter()
                    .find(|currency| requires_trustline(currency, &wallet.trustlines))
                    .cloned()
            });
            let issuer_for = |currency: &str, explicit: &Option<String>| {
                if is_native_currency(currency) {
                    return None;
                }
                explicit
                    .as_deref()
                    .map(str::trim)
                    .filter(|issuer| !issuer.is_empty())
                    .or_else(|| state.registry_issuer(currency))
                    .map(str::to_string)
            };
            (
                gated,
                issuer_for(&give_currency, &form.give_issuer),
                issuer_for(&want_currency, &form.want_issuer),
            )
        });

        if let Some(currency) = gated {
            return Err(AppError::Validation(format!(
                "{} requires a trust line. Enable it first",
                currency
            )));
        }

        Ok(CreateTradeRequest {
            username: username.to_string(),
            give_currency,
            give_amount: form.give_amount.trim().to_string(),
            want_currency,
            want_amount: form.want_amount.trim().to_string(),
            give_issuer,
            want_issuer,
        })
    }

    fn spawn_poll(&self, generation: u64, offer_sequence: u64) -> PollHandle {
        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        spawn_poll_loop(
            generation,
            offer_sequence,
            self.shared.poll_interval,
            self.shared.counters.clone(),
            move || {
                let weak = weak.clone();
                async move {
                    match weak.upgrade() {
                        Some(shared) => TradeController { shared }.poll_once(generation).await,
                        None => PollOutcome::Stale,
                    }
                }
            },
        )
    }

    /// Cancel the current poll handle and move to Idle. Caller holds `inner`.
    fn stop_locked(&self, inner: &mut ControllerInner) {
        if let Some(handle) = inner.poll.take() {
            handle.cancel();
        }
        inner.generation += 1;
        inner.phase = TradePhase::Idle;
    }

    /// Whether `generation` still owns the polled trade `offer_sequence`.
    fn owns(&self, inner: &ControllerInner, generation: u64, offer_sequence: u64) -> bool {
        inner.generation == generation
            && inner.phase.is_polling()
            && self
                .shared
                .store
                .read(|state| state.active_trade.as_ref().map(|t| t.offer_sequence))
                == Some(offer_sequence)
    }

    /// One status poll for the trade started under `generation`.
    pub async fn poll_once(&self, generation: u64) -> PollOutcome {
        let store = &self.shared.store;

        let target = {
            let inner = self.shared.inner.lock();
            if inner.generation != generation || !inner.phase.is_polling() {
                None
            } else {
                store.read(|state| {
                    let sequence = state.active_trade.as_ref()?.offer_sequence;
                    Some((state.username.clone()?, sequence))
                })
            }
        };
        let Some((username, offer_sequence)) = target else {
            tracing::debug!(generation, "Poll tick for a stopped trade");
            return PollOutcome::Stale;
        };

        let result = self.shared.api.trade_status(&username, offer_sequence).await;

        let outcome = {
            let mut inner = self.shared.inner.lock();
            if !self.owns(&inner, generation, offer_sequence) {
                tracing::debug!(generation, offer_sequence, "Discarding stale poll result");
                return PollOutcome::Stale;
            }
            self.apply_poll_result(&mut inner, offer_sequence, result)
        };

        if outcome == PollOutcome::Stop {
            refresh_all(self.shared.api.as_ref(), store, &username).await;
        }
        outcome
    }

    /// Apply a status answer for the trade `inner` still owns.
    fn apply_poll_result(
        &self,
        inner: &mut ControllerInner,
        offer_sequence: u64,
        result: std::result::Result<TradeStatusResponse, RequestError>,
    ) -> PollOutcome {
        let store = &self.shared.store;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(offer_sequence, error = %e, "Status poll failed, will retry");
                store.set_status_message(Some(StatusMessage::warning(format!(
                    "Status check failed: {}",
                    e.message
                ))));
                return PollOutcome::Continue;
            }
        };

        tracing::debug!(offer_sequence, status = %response.status, "Poll result");

        match response.status {
            OfferStatus::Submitted | OfferStatus::Open => {
                inner.phase = TradePhase::Polling;
                self.apply_progress(offer_sequence, &response, false);
                PollOutcome::Continue
            }
            OfferStatus::PartiallyFilled => {
                inner.phase = TradePhase::PartiallyFilled;
                self.apply_progress(offer_sequence, &response, true);
                PollOutcome::Continue
            }
            status @ (OfferStatus::Filled | OfferStatus::Cancelled | OfferStatus::Failed) => {
                self.stop_locked(inner);
                let resolution = self.resolution_for(offer_sequence, status, &response);
                store.resolve_trade(offer_sequence, resolution);
                tracing::info!(offer_sequence, %status, "Trade reached terminal status");
                PollOutcome::Stop
            }
        }
    }

    fn apply_progress(&self, offer_sequence: u64, response: &TradeStatusResponse, partial: bool) {
        self.shared.store.update_active_trade(offer_sequence, |trade, state| {
            trade.status = response.status;
            if response.tx_hash.is_some() {
                trade.tx_hash = response.tx_hash.clone();
            }
            state.trade.progress = Some(progress_for(response.status));
            state.trade.match_details = if partial {
                Some(MatchDetails {
                    offer_sequence,
                    give_currency: trade.give_currency.clone(),
                    give_amount: trade.give_amount.clone(),
                    want_currency: trade.want_currency.clone(),
                    want_amount: trade.want_amount.clone(),
                    rate: exchange_rate(&trade.give_amount, &trade.want_amount).unwrap_or(0.0),
                })
            } else {
                None
            };
        });
    }

    fn resolution_for(
        &self,
        offer_sequence: u64,
        status: OfferStatus,
        response: &TradeStatusResponse,
    ) -> TradeResolution {
        let trade = self.shared.store.read(|state| state.active_trade.clone());

        match status {
            OfferStatus::Filled => {
                let confirmation = trade.map(|trade| TradeConfirmation {
                    offer_sequence,
                    tx_hash: response.tx_hash.clone().or(trade.tx_hash),
                    last_ledger: response.last_ledger,
                    give_currency: trade.give_currency,
                    give_amount: trade.give_amount,
                    want_currency: trade.want_currency,
                    want_amount: trade.want_amount,
                });
                TradeResolution {
                    outcome: TradeOutcome::Filled,
                    confirmation,
                    screen: Screen::TradeConfirm,
                    status: StatusMessage::success(format!("Offer #{} filled", offer_sequence)),
                }
            }
            OfferStatus::Cancelled => TradeResolution {
                outcome: TradeOutcome::Cancelled,
                confirmation: None,
                screen: Screen::Dashboard,
                status: StatusMessage::warning(format!("Offer #{} was cancelled", offer_sequence)),
            },
            _ => TradeResolution {
                outcome: TradeOutcome::Failed,
                confirmation: None,
                screen: Screen::Dashboard,
                status: StatusMessage::error(format!("Offer #{} failed", offer_sequence)),
            },
        }
    }

    /// Cancel the trade being polled.
    ///
    /// On failure the trade and its poll loop are left untouched.
    pub async fn cancel_trade(&self) -> Result<()> {
        let store = &self.shared.store;

        let (generation, offer_sequence, username) = {
            let inner = self.shared.inner.lock();
            match inner.phase {
                TradePhase::Submitting => {
                    return Err(AppError::State(
                        "Trade is still being submitted".to_string(),
                    ))
                }
                TradePhase::Idle => {
                    return Err(AppError::State("No active trade to cancel".to_string()))
                }
                TradePhase::Polling | TradePhase::PartiallyFilled => {}
            }
            let target = store.read(|state| {
                Some((state.active_trade.as_ref()?.offer_sequence, state.username.clone()?))
            });
            let Some((offer_sequence, username)) = target else {
                return Err(AppError::State("No active trade to cancel".to_string()));
            };
            (inner.generation, offer_sequence, username)
        };

        tracing::info!(offer_sequence, "Cancelling trade");
        let result = self.shared.api.cancel_trade(&username, offer_sequence).await;

        if let Err(e) = result {
            tracing::warn!(offer_sequence, error = %e, "Cancel failed");
            store.set_status_message(Some(StatusMessage::error(format!(
                "Cancel failed: {}",
                e.message
            ))));
            return Err(e.into());
        }

        {
            let mut inner = self.shared.inner.lock();
            if !self.owns(&inner, generation, offer_sequence) {
                // A poll resolved the trade while the cancel was in flight
                tracing::debug!(offer_sequence, "Cancel confirmed for a trade already resolved");
                return Ok(());
            }
            self.stop_locked(&mut inner);
            store.resolve_trade(
                offer_sequence,
                TradeResolution {
                    outcome: TradeOutcome::Cancelled,
                    confirmation: None,
                    screen: Screen::Dashboard,
                    status: StatusMessage::success(format!("Offer #{} cancelled", offer_sequence)),
                },
            );
        }

        refresh_all(self.shared.api.as_ref(), store, &username).await;
        Ok(())
    }

    /// Stop polling and drop the active trade without contacting the backend.
    pub fn stop(&self) {
        let mut inner = self.shared.inner.lock();
        let was_active = inner.phase != TradePhase::Idle || inner.poll.is_some();
        self.stop_locked(&mut inner);
        if was_active {
            let store = &self.shared.store;
            store.clear_active_trade();
            store.set_submit_enabled(true);
            tracing::info!("Trade controller stopped");
        }
    }

    /// Full refresh for the logged-in user. No-op when logged out.
    pub async fn refresh(&self) -> Option<RefreshReport> {
        let username = self.shared.store.read(|state| state.username.clone())?;
        Some(refresh_all(self.shared.api.as_ref(), &self.shared.store, &username).await)
    }
}
