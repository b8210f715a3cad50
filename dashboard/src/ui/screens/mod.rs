//! # Screen Rendering
//!
//! One module per [`Screen`]. Every screen is a pure function from state to
//! lines.

pub mod confirm;
pub mod dashboard;
pub mod entry;
pub mod history;
pub mod offers;
pub mod trade;
pub mod trustlines;

use crate::app::{AppState, Screen};

/// Body lines for the current screen.
pub fn render(state: &AppState) -> Vec<String> {
    match state.current_screen {
        Screen::Entry => entry::render(state),
        Screen::Dashboard => dashboard::render(state),
        Screen::Trade => trade::render(state),
        Screen::TradeConfirm => confirm::render(state),
        Screen::OpenOffers => offers::render_list(state),
        Screen::OfferDetails => offers::render_details(state),
        Screen::History => history::render(state),
        Screen::TrustLines => trustlines::render(state),
    }
}
