//! # Full Refresh
//!
//! Re-fetches wallet summary, history and open offers concurrently and
//! writes each result into the store. Each fetch fails independently; a
//! failure leaves the previous data in place.

use crate::app::state::{StatusLevel, StatusMessage};
use crate::app::store::StateStore;
use crate::core::error::RequestError;
use crate::core::service::ApiService;

const REFRESH_WARNING: &str = "Could not refresh";

/// What a refresh managed to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub summary_updated: bool,
    pub history_updated: bool,
    pub offers_updated: bool,
    /// Per-endpoint failures, as `(what, error)`
    pub failures: Vec<(&'static str, RequestError)>,
    /// Session changed while the requests were in flight; nothing was applied
    pub discarded: bool,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        !self.discarded && self.failures.is_empty()
    }
}

/// Refresh everything shown for `username`.
#[tracing::instrument(skip(api, store))]
pub async fn refresh_all(api: &dyn ApiService, store: &StateStore, username: &str) -> RefreshReport {
    let (summary, history, offers) = futures::join!(
        api.wallet_summary(username),
        api.wallet_history(username),
        api.open_offers(username),
    );

    let mut report = RefreshReport::default();

    let still_current = store.read(|state| state.username.as_deref() == Some(username));
    if !still_current {
        tracing::debug!("Session changed during refresh, discarding results");
        report.discarded = true;
        return report;
    }

    match summary {
        Ok(summary) => {
            store.set_summary(summary);
            report.summary_updated = true;
        }
        Err(e) => report.failures.push(("wallet summary", e)),
    }

    match history {
        Ok(history) => {
            store.set_history(history);
            report.history_updated = true;
        }
        Err(e) => report.failures.push(("history", e)),
    }

    match offers {
        Ok(offers) => {
            store.set_open_offers(offers);
            report.offers_updated = true;
        }
        Err(e) => report.failures.push(("open offers", e)),
    }

    if let Some((what, error)) = report.failures.first() {
        tracing::warn!(failures = report.failures.len(), error = %error, "Refresh incomplete");
        let (what, message) = (*what, error.message.clone());
        store.amend_status_message(|current| Some(with_refresh_warning(current, what, &message)));
    } else {
        tracing::debug!("Refresh complete");
    }

    report
}

/// The status line after a failed refresh. A message already on screen, such
/// as a trade outcome, stays and gets the warning appended; an earlier refresh
/// warning is replaced.
fn with_refresh_warning(current: Option<StatusMessage>, what: &str, message: &str) -> StatusMessage {
    match current {
        Some(current) if !current.text.starts_with(REFRESH_WARNING) => StatusMessage {
            level: current.level.max(StatusLevel::Warning),
            text: format!("{}; could not refresh {}: {}", current.text, what, message),
        },
        _ => StatusMessage::warning(format!("{} {}: {}", REFRESH_WARNING, what, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock_api::MockApi;
    use crate::app::state::StatusLevel;

    #[tokio::test]
    async fn test_refresh_fills_store() {
        let api = MockApi::new();
        let store = StateStore::new();
        store.login("alice");

        let report = refresh_all(&api, &store, "alice").await;

        assert!(report.is_complete());
        let state = store.snapshot();
        let wallet = state.wallet.expect("summary applied");
        assert_eq!(wallet.address, MockApi::ADDRESS);
        assert_eq!(state.open_offers.len(), 1);
        assert_eq!(state.history.len(), 1);
        assert_eq!(api.counts().summary, 1);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_other_results() {
        let api = MockApi::new();
        api.fail_history(RequestError::new("Ledger unavailable"));
        let store = StateStore::new();
        store.login("alice");

        let report = refresh_all(&api, &store, "alice").await;

        assert!(!report.is_complete());
        assert!(report.summary_updated && report.offers_updated);
        assert!(!report.history_updated);
        let status = store.snapshot().status.expect("warning shown");
        assert_eq!(status.level, StatusLevel::Warning);
        assert_eq!(status.text, "Could not refresh history: Ledger unavailable");
    }

    #[tokio::test]
    async fn test_failure_keeps_outcome_message() {
        let api = MockApi::new();
        api.fail_summary(RequestError::new("Wallet not found"));
        let store = StateStore::new();
        store.login("alice");
        store.set_status_message(Some(StatusMessage::success("Offer #42 filled")));

        let report = refresh_all(&api, &store, "alice").await;

        assert!(!report.summary_updated);
        let status = store.snapshot().status.expect("status kept");
        assert_eq!(status.level, StatusLevel::Warning);
        assert_eq!(
            status.text,
            "Offer #42 filled; could not refresh wallet summary: Wallet not found"
        );
    }

    #[test]
    fn test_repeated_failure_replaces_previous_warning() {
        let first = with_refresh_warning(None, "history", "Ledger unavailable");
        let second = with_refresh_warning(Some(first), "open offers", "Timeout");
        assert_eq!(second.text, "Could not refresh open offers: Timeout");

        let failed = with_refresh_warning(Some(StatusMessage::error("Offer #9 failed")), "history", "Timeout");
        assert_eq!(failed.level, StatusLevel::Error);
    }

    #[tokio::test]
    async fn test_results_for_old_session_are_discarded() {
        let api = MockApi::new();
        let store = StateStore::new();
        store.login("bob");

        let report = refresh_all(&api, &store, "alice").await;

        assert!(report.discarded);
        assert!(store.snapshot().wallet.is_none());
    }
}
