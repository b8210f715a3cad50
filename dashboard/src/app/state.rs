//! # Application State Types
//!
//! All state-related types for the dashboard: screens, the active trade, the
//! trade screen projection and the wallet snapshot. [`AppState`] is owned by
//! [`StateStore`](crate::app::store::StateStore); everything else only sees
//! cloned snapshots.

use std::collections::BTreeMap;

use shared::dto::{HistoryEntry, OfferStatus, OpenOffer, TokenBalance, TrustLine, WalletSummary};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Entry screen (login). Shown whenever there is no session.
    #[default]
    Entry,
    /// Balances, trust-line gates and a summary of open offers
    Dashboard,
    /// Trade form and progress tracker for the active trade
    Trade,
    /// Confirmation of a filled trade
    TradeConfirm,
    /// List of the account's open offers
    OpenOffers,
    /// Read-only details of one stored open offer
    OfferDetails,
    /// Ledger transaction history
    History,
    /// Trust-line overview and setup
    TrustLines,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Entry,
            Screen::Dashboard,
            Screen::Trade,
            Screen::TradeConfirm,
            Screen::OpenOffers,
            Screen::OfferDetails,
            Screen::History,
            Screen::TrustLines,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Entry => "Welcome",
            Screen::Dashboard => "Dashboard",
            Screen::Trade => "Trade",
            Screen::TradeConfirm => "Trade Confirmed",
            Screen::OpenOffers => "Open Offers",
            Screen::OfferDetails => "Offer Details",
            Screen::History => "History",
            Screen::TrustLines => "Trust Lines",
        }
    }

    /// Parse a screen name as typed in the shell (`offers`, `trust-lines`, ...).
    pub fn from_name(name: &str) -> Option<Screen> {
        match name.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "entry" | "login" => Some(Screen::Entry),
            "dashboard" | "home" => Some(Screen::Dashboard),
            "trade" | "swap" => Some(Screen::Trade),
            "confirm" | "tradeconfirm" => Some(Screen::TradeConfirm),
            "offers" | "openoffers" => Some(Screen::OpenOffers),
            "offer" | "offerdetails" => Some(Screen::OfferDetails),
            "history" => Some(Screen::History),
            "trust" | "trustlines" => Some(Screen::TrustLines),
            _ => None,
        }
    }

    /// Check if a screen requires a logged-in user
    pub fn requires_auth(self) -> bool {
        !matches!(self, Screen::Entry)
    }
}

/// Position of the trade lifecycle state machine.
///
/// Terminal statuses are not phases: they are recorded as a
/// [`TradeOutcome`] and the controller returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradePhase {
    #[default]
    Idle,
    /// Create request in flight, submit control disabled
    Submitting,
    Polling,
    /// Partial fill seen; still polling
    PartiallyFilled,
}

impl TradePhase {
    /// Whether a poll loop belongs to this phase.
    pub fn is_polling(self) -> bool {
        matches!(self, TradePhase::Polling | TradePhase::PartiallyFilled)
    }

    pub fn label(self) -> &'static str {
        match self {
            TradePhase::Idle => "idle",
            TradePhase::Submitting => "submitting",
            TradePhase::Polling => "polling",
            TradePhase::PartiallyFilled => "partially filled",
        }
    }
}

/// The single in-flight trade.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTrade {
    pub offer_sequence: u64,
    /// Last known transaction hash (creation hash until a status reports one)
    pub tx_hash: Option<String>,
    pub give_currency: String,
    pub give_amount: String,
    pub want_currency: String,
    pub want_amount: String,
    /// Last status seen from the backend
    pub status: OfferStatus,
}

/// Progress indicator data, derived from the last status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeProgress {
    pub status: OfferStatus,
    pub percent: u8,
    /// Active stage of the four-stage tracker, `None` for cancelled/failed
    pub stage: Option<usize>,
}

/// Partial-fill details. The rate is computed locally from the submitted amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetails {
    pub offer_sequence: u64,
    pub give_currency: String,
    pub give_amount: String,
    pub want_currency: String,
    pub want_amount: String,
    /// `want_amount / give_amount`
    pub rate: f64,
}

/// Confirmation data for a filled trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeConfirmation {
    pub offer_sequence: u64,
    pub tx_hash: Option<String>,
    pub last_ledger: Option<u64>,
    pub give_currency: String,
    pub give_amount: String,
    pub want_currency: String,
    pub want_amount: String,
}

/// How the last trade ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOutcome {
    Filled,
    Cancelled,
    Failed,
}

impl TradeOutcome {
    /// Outcome for a terminal status, `None` otherwise.
    pub fn from_status(status: OfferStatus) -> Option<Self> {
        match status {
            OfferStatus::Filled => Some(TradeOutcome::Filled),
            OfferStatus::Cancelled => Some(TradeOutcome::Cancelled),
            OfferStatus::Failed => Some(TradeOutcome::Failed),
            _ => None,
        }
    }
}

/// Severity of the status line, least severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn tag(self) -> &'static str {
        match self {
            StatusLevel::Info => "INFO",
            StatusLevel::Success => "OK",
            StatusLevel::Warning => "WARN",
            StatusLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}

/// Trade screen projection
#[derive(Debug, Clone, PartialEq)]
pub struct TradeScreenState {
    pub progress: Option<TradeProgress>,
    pub match_details: Option<MatchDetails>,
    pub confirmation: Option<TradeConfirmation>,
    /// Disabled while a create request is in flight
    pub submit_enabled: bool,
    pub last_outcome: Option<TradeOutcome>,
}

impl Default for TradeScreenState {
    fn default() -> Self {
        Self {
            progress: None,
            match_details: None,
            confirmation: None,
            submit_enabled: true,
            last_outcome: None,
        }
    }
}

/// Wallet snapshot from `/api/wallet/summary`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub address: String,
    pub phone: Option<String>,
    pub xrp_balance: f64,
    pub token_balances: Vec<TokenBalance>,
    pub trustlines: Vec<TrustLine>,
    pub open_offers_count: usize,
    /// Currency code to default issuer
    pub token_registry: BTreeMap<String, String>,
}

impl From<WalletSummary> for WalletState {
    fn from(summary: WalletSummary) -> Self {
        Self {
            address: summary.address,
            phone: summary.phone,
            xrp_balance: summary.xrp_balance,
            token_balances: summary.token_balances,
            trustlines: summary.trustlines,
            open_offers_count: summary.open_offers_count,
            token_registry: summary.token_registry,
        }
    }
}

/// Global application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Logged-in username (normalized)
    pub username: Option<String>,
    /// Wallet summary, `None` until the first refresh succeeds
    pub wallet: Option<WalletState>,
    pub open_offers: Vec<OpenOffer>,
    pub history: Vec<HistoryEntry>,
    pub active_trade: Option<ActiveTrade>,
    pub trade: TradeScreenState,
    /// Offer shown on the details screen
    pub selected_offer: Option<u64>,
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Check if a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Trust lines from the wallet summary, empty before the first refresh
    pub fn trustlines(&self) -> &[TrustLine] {
        self.wallet.as_ref().map(|w| w.trustlines.as_slice()).unwrap_or(&[])
    }

    /// Stored open offer by sequence
    pub fn open_offer(&self, offer_sequence: u64) -> Option<&OpenOffer> {
        self.open_offers.iter().find(|o| o.offer_sequence == offer_sequence)
    }

    /// Registry issuer for a currency code
    pub fn registry_issuer(&self, currency: &str) -> Option<&str> {
        let wallet = self.wallet.as_ref()?;
        wallet
            .token_registry
            .get(&shared::normalize_currency(currency))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::from_name("offers"), Some(Screen::OpenOffers));
        assert_eq!(Screen::from_name("Trust-Lines"), Some(Screen::TrustLines));
        assert_eq!(Screen::from_name("nowhere"), None);
        assert!(!Screen::Entry.requires_auth());
        assert!(Screen::all().iter().filter(|s| s.requires_auth()).count() == Screen::all().len() - 1);
    }

    #[test]
    fn test_phase_polling() {
        assert!(TradePhase::Polling.is_polling());
        assert!(TradePhase::PartiallyFilled.is_polling());
        assert!(!TradePhase::Submitting.is_polling());
        assert!(!TradePhase::Idle.is_polling());
    }

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(TradeOutcome::from_status(OfferStatus::Filled), Some(TradeOutcome::Filled));
        assert_eq!(TradeOutcome::from_status(OfferStatus::Failed), Some(TradeOutcome::Failed));
        assert_eq!(TradeOutcome::from_status(OfferStatus::Open), None);
    }

    #[test]
    fn test_registry_lookup_is_case_insensitive() {
        let mut state = AppState::default();
        assert_eq!(state.registry_issuer("USD"), None);

        let mut wallet = WalletState::default();
        wallet.token_registry.insert("USD".to_string(), "rIssuer".to_string());
        state.wallet = Some(wallet);
        assert_eq!(state.registry_issuer("usd"), Some("rIssuer"));
    }
}
