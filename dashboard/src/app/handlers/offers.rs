//! # Offer Handlers
//!
//! Read-only presentation of stored open offers. Nothing here touches the
//! trade controller.

use shared::dto::OpenOffer;

use crate::app::store::StateStore;
use crate::core::error::{AppError, Result};

/// Show the details of a stored open offer.
pub(crate) fn view_offer(store: &StateStore, offer_sequence: u64) -> Result<OpenOffer> {
    let offer = store
        .read(|state| state.open_offer(offer_sequence).cloned())
        .ok_or_else(|| {
            AppError::State(format!("Offer #{} is not in the open offers list", offer_sequence))
        })?;

    store.select_offer(offer_sequence);
    Ok(offer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::TradeController;
    use crate::app::mock_api::MockApi;
    use crate::app::state::Screen;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_view_offer_creates_no_trade() {
        let api = Arc::new(MockApi::new());
        let store = StateStore::new();
        store.login("alice");
        let controller = TradeController::new(api.clone(), store.clone(), Duration::from_secs(4));
        controller.refresh().await;

        let offer = view_offer(&store, 7).expect("offer 7 is stored");
        assert_eq!(offer.sell.currency, "XRP");

        let state = store.snapshot();
        assert_eq!(state.current_screen, Screen::OfferDetails);
        assert_eq!(state.selected_offer, Some(7));
        assert!(state.active_trade.is_none());

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(controller.poll_loops_started(), 0);
        assert_eq!(api.counts().status, 0);
    }

    #[test]
    fn test_unknown_offer() {
        let store = StateStore::new();
        let err = view_offer(&store, 99).expect_err("not stored");
        assert_eq!(err.user_message(), "Offer #99 is not in the open offers list");
        assert_eq!(store.snapshot().selected_offer, None);
    }
}
