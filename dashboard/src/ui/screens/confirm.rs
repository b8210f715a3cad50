//! Trade confirmation screen shown after a fill.

use crate::app::AppState;

pub fn render(state: &AppState) -> Vec<String> {
    let Some(confirmation) = &state.trade.confirmation else {
        return vec!["No confirmed trade to show.".to_string()];
    };

    let mut lines = vec![
        format!("Offer #{} filled", confirmation.offer_sequence),
        format!("  Gave:     {} {}", confirmation.give_amount, confirmation.give_currency),
        format!("  Received: {} {}", confirmation.want_amount, confirmation.want_currency),
        format!("  Tx:       {}", confirmation.tx_hash.as_deref().unwrap_or("-")),
    ];
    if let Some(ledger) = confirmation.last_ledger {
        lines.push(format!("  Ledger:   {}", ledger));
    }
    lines
}
