//! # State Store
//!
//! Single owner of [`AppState`]. Writers go through the named mutators below;
//! each one runs under one write lock, so no reader ever observes a partial
//! update. Readers take [`StateStore::snapshot`], an owned clone.
//!
//! Every mutation bumps a revision counter published on a
//! [`tokio::sync::watch`] channel. The view layer subscribes to it and redraws
//! on change.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{HistoryEntry, OpenOffer, TrustLine, WalletSummary};
use tokio::sync::watch;

use crate::app::progress::progress_for;
use crate::app::state::{
    ActiveTrade, AppState, Screen, StatusMessage, TradeConfirmation, TradeOutcome, WalletState,
};

/// Everything that changes together when a trade reaches its end.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeResolution {
    pub outcome: TradeOutcome,
    pub confirmation: Option<TradeConfirmation>,
    pub screen: Screen,
    pub status: StatusMessage,
}

/// Shared handle to the application state. Cloning shares the same state.
#[derive(Clone)]
pub struct StateStore {
    state: Arc<RwLock<AppState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0u64);
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            revision: Arc::new(revision),
        }
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Read one value without cloning the whole state.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that wakes on every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = {
            let mut state = self.state.write();
            f(&mut state)
        };
        self.revision.send_modify(|rev| *rev += 1);
        result
    }

    // ---- session ----

    /// Start a fresh session for `username` on the dashboard screen.
    pub fn login(&self, username: &str) {
        self.mutate(|state| {
            *state = AppState {
                username: Some(username.to_string()),
                current_screen: Screen::Dashboard,
                ..AppState::default()
            };
        });
    }

    /// Discard all session state.
    pub fn reset(&self) {
        self.mutate(|state| *state = AppState::default());
    }

    // ---- wallet data ----

    pub fn set_summary(&self, summary: WalletSummary) {
        self.mutate(|state| state.wallet = Some(WalletState::from(summary)));
    }

    pub fn set_trustlines(&self, trustlines: Vec<TrustLine>) {
        self.mutate(|state| {
            state.wallet.get_or_insert_with(WalletState::default).trustlines = trustlines;
        });
    }

    pub fn set_open_offers(&self, offers: Vec<OpenOffer>) {
        self.mutate(|state| {
            if let Some(wallet) = state.wallet.as_mut() {
                wallet.open_offers_count = offers.len();
            }
            state.open_offers = offers;
        });
    }

    pub fn set_history(&self, history: Vec<HistoryEntry>) {
        self.mutate(|state| state.history = history);
    }

    // ---- active trade ----

    /// Install a new active trade and reset the trade screen for it.
    pub fn set_active_trade(&self, trade: ActiveTrade) {
        self.mutate(|state| {
            state.trade.progress = Some(progress_for(trade.status));
            state.trade.match_details = None;
            state.trade.confirmation = None;
            state.trade.last_outcome = None;
            state.active_trade = Some(trade);
        });
    }

    /// Remove the active trade, returning it.
    pub fn clear_active_trade(&self) -> Option<ActiveTrade> {
        self.mutate(|state| {
            state.trade.match_details = None;
            state.active_trade.take()
        })
    }

    /// Apply `f` to the active trade only if it is still `offer_sequence`.
    ///
    /// Returns `false`, changing nothing, when the trade was cleared or replaced.
    pub fn update_active_trade(
        &self,
        offer_sequence: u64,
        f: impl FnOnce(&mut ActiveTrade, &mut AppState),
    ) -> bool {
        let applied = {
            let mut state = self.state.write();
            match state.active_trade.take() {
                Some(mut trade) if trade.offer_sequence == offer_sequence => {
                    f(&mut trade, &mut *state);
                    state.active_trade = Some(trade);
                    true
                }
                other => {
                    state.active_trade = other;
                    false
                }
            }
        };
        if applied {
            self.revision.send_modify(|rev| *rev += 1);
        }
        applied
    }

    /// End the active trade `offer_sequence` in one step.
    ///
    /// Returns `false` when that trade is no longer active.
    pub fn resolve_trade(&self, offer_sequence: u64, resolution: TradeResolution) -> bool {
        let resolved = {
            let mut state = self.state.write();
            if state.active_trade.as_ref().map(|t| t.offer_sequence) != Some(offer_sequence) {
                false
            } else {
                let status = match resolution.outcome {
                    TradeOutcome::Filled => shared::dto::OfferStatus::Filled,
                    TradeOutcome::Cancelled => shared::dto::OfferStatus::Cancelled,
                    TradeOutcome::Failed => shared::dto::OfferStatus::Failed,
                };
                state.active_trade = None;
                state.trade.progress = Some(progress_for(status));
                state.trade.match_details = None;
                state.trade.confirmation = resolution.confirmation;
                state.trade.last_outcome = Some(resolution.outcome);
                state.trade.submit_enabled = true;
                state.current_screen = resolution.screen;
                state.status = Some(resolution.status);
                true
            }
        };
        if resolved {
            self.revision.send_modify(|rev| *rev += 1);
        }
        resolved
    }

    // ---- trade screen projection ----

    pub fn set_submit_enabled(&self, enabled: bool) {
        self.mutate(|state| state.trade.submit_enabled = enabled);
    }

    // ---- navigation and messages ----

    pub fn set_status_message(&self, message: Option<StatusMessage>) {
        self.mutate(|state| state.status = message);
    }

    /// Replace the status line with `f(current)` in one step.
    pub fn amend_status_message(&self, f: impl FnOnce(Option<StatusMessage>) -> Option<StatusMessage>) {
        self.mutate(|state| state.status = f(state.status.take()));
    }

    pub fn navigate(&self, screen: Screen) {
        self.mutate(|state| state.current_screen = screen);
    }

    /// Select an offer for the details screen and show it.
    pub fn select_offer(&self, offer_sequence: u64) {
        self.mutate(|state| {
            state.selected_offer = Some(offer_sequence);
            state.current_screen = Screen::OfferDetails;
        });
    }
}
