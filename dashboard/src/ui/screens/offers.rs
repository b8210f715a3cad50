//! # Open Offers Screens
//!
//! The offer list and the read-only details of one selected offer.

use shared::dto::{LedgerAmount, OpenOffer};
use shared::utils::truncate_address;

use crate::app::progress::exchange_rate;
use crate::app::AppState;

fn amount(value: &LedgerAmount) -> String {
    format!("{} {}", value.value, value.currency)
}

fn summary(offer: &OpenOffer) -> String {
    format!(
        "#{:<8} sell {:<18} buy {:<18} {}",
        offer.offer_sequence,
        amount(&offer.sell),
        amount(&offer.buy),
        offer.status
    )
}

pub fn render_list(state: &AppState) -> Vec<String> {
    if state.open_offers.is_empty() {
        return vec!["No open offers.".to_string()];
    }
    let mut lines: Vec<String> = state.open_offers.iter().map(summary).collect();
    lines.push("view #<sequence>: show offer details".to_string());
    lines
}

pub fn render_details(state: &AppState) -> Vec<String> {
    let offer = state.selected_offer.and_then(|seq| state.open_offer(seq));
    let Some(offer) = offer else {
        return vec!["Offer no longer open.".to_string()];
    };

    let mut lines = vec![
        format!("Offer #{}", offer.offer_sequence),
        format!("  Sell:   {}", amount(&offer.sell)),
        format!("  Buy:    {}", amount(&offer.buy)),
        format!("  Status: {}", offer.status),
    ];
    for side in [&offer.sell, &offer.buy] {
        if !side.issuer.is_empty() {
            lines.push(format!("  {} issuer: {}", side.currency, truncate_address(&side.issuer)));
        }
    }
    if let Some(rate) = exchange_rate(&offer.sell.value, &offer.buy.value) {
        lines.push(format!("  Rate:   {:.6} {}/{}", rate, offer.buy.currency, offer.sell.currency));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::OfferStatus;

    fn state_with_offer() -> AppState {
        AppState {
            open_offers: vec![OpenOffer {
                offer_sequence: 7,
                sell: LedgerAmount {
                    currency: "XRP".to_string(),
                    issuer: String::new(),
                    value: "10".to_string(),
                },
                buy: LedgerAmount {
                    currency: "USD".to_string(),
                    issuer: "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B".to_string(),
                    value: "25".to_string(),
                },
                status: OfferStatus::Open,
            }],
            ..AppState::default()
        }
    }

    #[test]
    fn test_list_rows() {
        let lines = render_list(&state_with_offer());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#7 "));
        assert!(lines[0].contains("sell 10 XRP"));
        assert!(render_list(&AppState::default())[0].contains("No open offers"));
    }

    #[test]
    fn test_details_of_selected_offer() {
        let mut state = state_with_offer();
        state.selected_offer = Some(7);

        let lines = render_details(&state);
        assert_eq!(lines[0], "Offer #7");
        assert!(lines.iter().any(|l| l == "  USD issuer: rvYA...s59B"));
        assert!(lines.iter().any(|l| l == "  Rate:   2.500000 USD/XRP"));

        state.selected_offer = Some(8);
        assert_eq!(render_details(&state), vec!["Offer no longer open."]);
    }
}
