//! # View Synchronizer
//!
//! Turns an [`AppState`] snapshot into plain-text regions. Rendering is a pure
//! function of `(state, phase)`: it never touches the network or the store,
//! and the same inputs always produce byte-identical output.
//!
//! ```text
//! StateStore ──revision──▶ ViewSynchronizer::run ──snapshot──▶ render() ──▶ sink
//! ```
//!
//! ## Regions
//!
//! - **header**: title, account and balances ([`widgets::header`])
//! - **gates**: registry currencies locked behind a missing trust line
//! - **body**: the current [`Screen`](crate::app::Screen) ([`screens`])
//! - **status**: trade phase and latest message ([`widgets::status_bar`])

pub mod screens;
pub mod widgets;

use std::fmt;

use crate::app::{AppState, TradeController, TradePhase};
use crate::app::store::StateStore;

/// Width of the region dividers.
pub const VIEW_WIDTH: usize = 72;

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub header: Vec<String>,
    pub gates: Vec<String>,
    pub body: Vec<String>,
    pub status: String,
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = widgets::divider(VIEW_WIDTH);
        for line in &self.header {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", divider)?;
        if !self.gates.is_empty() {
            for line in &self.gates {
                writeln!(f, "{}", line)?;
            }
            writeln!(f, "{}", divider)?;
        }
        for line in &self.body {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", divider)?;
        write!(f, "{}", self.status)
    }
}

/// Renders state snapshots and keeps an output sink in step with the store.
pub struct ViewSynchronizer;

impl ViewSynchronizer {
    /// Render one frame.
    pub fn render(state: &AppState, phase: TradePhase) -> RenderedView {
        let gates = if state.is_authenticated() {
            screens::trustlines::gate_lines(state)
        } else {
            Vec::new()
        };

        RenderedView {
            header: widgets::render_header(state),
            gates,
            body: screens::render(state),
            status: widgets::render_status_bar(state, phase),
        }
    }

    /// Redraw into `sink` on every store revision, starting with the current
    /// state. Consecutive identical frames are emitted once.
    ///
    /// Holds its own store handle, so it runs until the task is aborted.
    pub async fn run<F>(store: StateStore, controller: TradeController, mut sink: F)
    where
        F: FnMut(&RenderedView) + Send,
    {
        let mut revisions = store.subscribe();
        let mut last: Option<RenderedView> = None;

        loop {
            revisions.mark_unchanged();
            let view = Self::render(&store.snapshot(), controller.phase());
            if last.as_ref() != Some(&view) {
                sink(&view);
                last = Some(view);
            }

            if revisions.changed().await.is_err() {
                tracing::debug!("State store closed, view synchronizer stopping");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::progress::progress_for;
    use crate::app::{ActiveTrade, Screen, StatusMessage, TradeConfirmation, WalletState};
    use parking_lot::Mutex;
    use shared::dto::OfferStatus;
    use std::sync::Arc;

    fn trade_state() -> AppState {
        let mut state = AppState {
            current_screen: Screen::Trade,
            username: Some("alice".to_string()),
            wallet: Some(WalletState {
                address: "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh".to_string(),
                xrp_balance: 1250.5,
                ..WalletState::default()
            }),
            active_trade: Some(ActiveTrade {
                offer_sequence: 42,
                tx_hash: Some("CREATE42".to_string()),
                give_currency: "XRP".to_string(),
                give_amount: "100".to_string(),
                want_currency: "USD".to_string(),
                want_amount: "250".to_string(),
                status: OfferStatus::Open,
            }),
            status: Some(StatusMessage::info("Offer #42 submitted")),
            ..AppState::default()
        };
        state.trade.progress = Some(progress_for(OfferStatus::Open));
        state
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = trade_state();
        let first = ViewSynchronizer::render(&state, TradePhase::Polling).to_string();
        let second = ViewSynchronizer::render(&state, TradePhase::Polling).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_trade_frame() {
        let view = ViewSynchronizer::render(&trade_state(), TradePhase::Polling);
        let text = view.to_string();

        assert!(text.contains("Offer #42: give 100 XRP for 250 USD"));
        assert!(text.contains(" 45%"));
        assert!(text.contains("(>) On ledger"));
        assert_eq!(view.status, "[trade: polling] [offer #42 open] INFO: Offer #42 submitted");
    }

    #[test]
    fn test_confirm_frame_shows_hash() {
        let mut state = trade_state();
        state.active_trade = None;
        state.current_screen = Screen::TradeConfirm;
        state.trade.confirmation = Some(TradeConfirmation {
            offer_sequence: 42,
            tx_hash: Some("ABCD".to_string()),
            last_ledger: Some(1000),
            give_currency: "XRP".to_string(),
            give_amount: "100".to_string(),
            want_currency: "USD".to_string(),
            want_amount: "250".to_string(),
        });

        let text = ViewSynchronizer::render(&state, TradePhase::Idle).to_string();
        assert!(text.contains("Offer #42 filled"));
        assert!(text.contains("ABCD"));
    }

    #[test]
    fn test_gates_hidden_when_logged_out() {
        let mut state = trade_state();
        if let Some(wallet) = state.wallet.as_mut() {
            wallet.token_registry.insert("EUR".to_string(), "rEuro".to_string());
        }
        assert_eq!(ViewSynchronizer::render(&state, TradePhase::Idle).gates.len(), 1);

        state.username = None;
        assert!(ViewSynchronizer::render(&state, TradePhase::Idle).gates.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_redraws_on_revision() {
        use crate::app::mock_api::MockApi;
        use std::time::Duration;

        let store = StateStore::new();
        let controller = TradeController::new(Arc::new(MockApi::new()), store.clone(), Duration::from_secs(4));
        let frames: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let sink_frames = frames.clone();
        let task = tokio::spawn(ViewSynchronizer::run(store.clone(), controller, move |view| {
            sink_frames.lock().push(view.to_string());
        }));

        tokio::time::sleep(Duration::from_millis(1)).await;
        store.login("alice");
        tokio::time::sleep(Duration::from_millis(1)).await;

        let frames = frames.lock().clone();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].contains("not logged in"));
        assert!(frames[1].contains("user: alice"));
        task.abort();
    }
}
