//! # Application Orchestrator
//!
//! The main [`App`] struct wires the state store, the trade controller, the
//! backend client and the session file together, and exposes one method per
//! user action.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  main loop                                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - handle_event() - dispatches shell commands        │   │
//! │  │  - login() / logout() / resume()                     │   │
//! │  │  - create_trade() / cancel_trade() / view_offer()    │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  StateStore: Arc<RwLock<AppState>> + revision watch  │   │
//! │  │  - named mutators only                               │   │
//! │  │  - snapshot() for readers                            │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! └───────────────┼─────────────────────────────────────────────┘
//!                 │ revision changed
//! ┌───────────────▼─────────────────────────────────────────────┐
//! │  ViewSynchronizer (ui) - redraws from a snapshot            │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tokio tasks                                                │
//! │  - trade_poll  - one per active trade (tasks::poll)         │
//! │  - refresh     - summary + history + offers (tasks::refresh)│
//! │  - input       - stdin reader feeding AppEvent (main.rs)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Orchestrator with one method per user action
//! - **[`StateStore`]**: Single owner of [`AppState`] (see [`store`] module)
//! - **[`TradeController`]**: Trade lifecycle state machine (see [`controller`] module)
//! - **[`AppEvent`]**: Input events for the main loop (see [`events`] module)
//! - **[`handlers`]**: Login, navigation, offer, payment and trust-line actions
//! - **[`tasks`]**: Poll loop and full refresh
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use dashboard::app::{App, TradeForm};
//! use dashboard::core::DashboardConfig;
//!
//! # async fn demo() -> dashboard::core::Result<()> {
//! let app = App::new(&DashboardConfig::default());
//! app.login("alice", "secret").await?;
//! app.create_trade(TradeForm::new("100", "XRP", "250", "USD")).await?;
//! println!("{:?}", app.phase());
//! # Ok(())
//! # }
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types and definitions
//! - [`gate`]: Trust-line gate evaluation
//! - [`progress`]: Progress and stage derivation from offer status

pub mod commands;
pub mod controller;
pub mod event_handler;
pub mod events;
pub mod gate;
pub mod handlers;
pub mod progress;
pub mod state;
pub mod store;
pub mod tasks;

#[cfg(test)]
pub(crate) mod mock_api;

pub use commands::Command;
pub use controller::{TradeController, TradeForm};
pub use event_handler::{EventReply, Flow};
pub use events::AppEvent;
pub use state::*;
pub use store::StateStore;
pub use tasks::RefreshReport;

use std::sync::Arc;
use std::time::Duration;

use shared::dto::{IssuerCheck, OpenOffer, SendPaymentResponse};

use crate::core::config::DashboardConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;

/// Main application orchestrator.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct App {
    api: Arc<dyn ApiService>,
    store: StateStore,
    controller: TradeController,
    session: SessionStore,
}

impl App {
    /// Create an application talking to the backend at `config.api_url`.
    pub fn new(config: &DashboardConfig) -> Self {
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config));
        let session = SessionStore::new(config.session_file.clone());
        tracing::info!(api_url = %config.api_url, poll_interval_ms = config.poll_interval.as_millis() as u64, "App initialized");
        Self::with_services(api, session, config.poll_interval)
    }

    /// Create an application over any [`ApiService`] (used by tests).
    pub fn with_services(api: Arc<dyn ApiService>, session: SessionStore, poll_interval: Duration) -> Self {
        let store = StateStore::new();
        let controller = TradeController::new(api.clone(), store.clone(), poll_interval);
        Self {
            api,
            store,
            controller,
            session,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn controller(&self) -> &TradeController {
        &self.controller
    }

    pub fn phase(&self) -> TradePhase {
        self.controller.phase()
    }

    /// Log in, persist the session and load wallet data.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        handlers::auth::login(self.api.as_ref(), &self.controller, &self.session, username, password).await
    }

    /// Restore the saved session, if any.
    pub async fn resume(&self) -> Result<Option<String>> {
        handlers::auth::resume(&self.controller, &self.session).await
    }

    pub fn logout(&self) -> Result<()> {
        handlers::auth::logout(&self.controller, &self.session)
    }

    /// Switch screens; guarded screens fall back to the entry screen.
    pub fn navigate(&self, screen: Screen) -> Screen {
        handlers::navigation::navigate(&self.store, screen)
    }

    pub async fn create_trade(&self, form: TradeForm) -> Result<ActiveTrade> {
        self.controller.create_trade(form).await
    }

    pub async fn cancel_trade(&self) -> Result<()> {
        self.controller.cancel_trade().await
    }

    /// Show a stored open offer. Never starts a trade or a poll loop.
    pub fn view_offer(&self, offer_sequence: u64) -> Result<OpenOffer> {
        handlers::offers::view_offer(&self.store, offer_sequence)
    }

    /// Open a trust line so `currency` is no longer gated.
    pub async fn enable_currency(
        &self,
        currency: &str,
        issuer: Option<&str>,
        limit: Option<&str>,
    ) -> Result<IssuerCheck> {
        handlers::trustline::enable_currency(self.api.as_ref(), &self.controller, currency, issuer, limit).await
    }

    /// Send XRP or a trust-line-enabled token to `destination`.
    pub async fn send_payment(
        &self,
        destination: &str,
        amount: &str,
        currency: &str,
        issuer: Option<&str>,
    ) -> Result<SendPaymentResponse> {
        handlers::payment::send(self.api.as_ref(), &self.controller, destination, amount, currency, issuer).await
    }

    pub async fn refresh(&self) -> Option<RefreshReport> {
        self.controller.refresh().await
    }

    /// Stop background polling. Called on shutdown.
    pub fn shutdown(&self) {
        self.controller.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock_api::MockApi;
    use shared::dto::OfferStatus;

    #[tokio::test(start_paused = true)]
    async fn test_logout_stops_polling() {
        let api = Arc::new(MockApi::new());
        api.set_trustlines(vec![MockApi::usd_line()]);
        let dir = tempfile::tempdir().expect("tempdir");
        let app = App::with_services(
            api.clone(),
            SessionStore::new(dir.path().join("session.json")),
            Duration::from_secs(4),
        );

        app.login("alice", "pw").await.expect("login");
        app.create_trade(TradeForm::new("100", "XRP", "250", "USD"))
            .await
            .expect("create");
        api.script_status(Ok(MockApi::status(OfferStatus::Filled, Some("ABCD"))));

        app.logout().expect("logout");
        tokio::time::sleep(Duration::from_secs(20)).await;

        assert_eq!(api.counts().status, 0);
        assert_eq!(app.controller().live_poll_loops(), 0);
        assert_eq!(app.store().snapshot(), AppState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_restores_saved_user() {
        let api = Arc::new(MockApi::new());
        let dir = tempfile::tempdir().expect("tempdir");
        let session = SessionStore::new(dir.path().join("session.json"));
        session.save("carol").expect("save");

        let app = App::with_services(api.clone(), session, Duration::from_secs(4));
        assert_eq!(app.resume().await.expect("resume"), Some("carol".to_string()));
        assert_eq!(app.store().snapshot().current_screen, Screen::Dashboard);
        assert_eq!(api.counts().summary, 1);
    }
}
