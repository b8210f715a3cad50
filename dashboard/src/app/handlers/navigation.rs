//! # Navigation Handlers
//!
//! Screen changes with an authentication guard.

use crate::app::state::Screen;
use crate::app::store::StateStore;

/// Handle screen change with authentication guard
///
/// Returns the screen actually shown.
pub(crate) fn navigate(store: &StateStore, screen: Screen) -> Screen {
    let (authenticated, has_selection) =
        store.read(|state| (state.is_authenticated(), state.selected_offer.is_some()));

    let target = if screen.requires_auth() && !authenticated {
        tracing::info!("Access denied: {} requires login, showing entry screen", screen.title());
        Screen::Entry
    } else if screen == Screen::Entry && authenticated {
        Screen::Dashboard
    } else if screen == Screen::OfferDetails && !has_selection {
        Screen::OpenOffers
    } else {
        screen
    };

    store.navigate(target);
    target
}
