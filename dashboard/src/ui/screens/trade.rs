//! # Trade Screen
//!
//! Live view of the active trade: progress bar, stage tracker and, after a
//! partial fill, the match details.

use crate::app::{AppState, TradeOutcome};
use crate::ui::widgets::{progress_bar, stage_tracker};

pub fn render(state: &AppState) -> Vec<String> {
    let mut lines = Vec::new();
    let projection = &state.trade;

    match &state.active_trade {
        Some(trade) => {
            lines.push(format!(
                "Offer #{}: give {} {} for {} {}",
                trade.offer_sequence,
                trade.give_amount,
                trade.give_currency,
                trade.want_amount,
                trade.want_currency
            ));
            lines.push(format!("Status: {}", trade.status));
            if let Some(hash) = &trade.tx_hash {
                lines.push(format!("Tx: {}", hash));
            }
        }
        None => match projection.last_outcome {
            Some(TradeOutcome::Filled) => lines.push("Last trade filled.".to_string()),
            Some(TradeOutcome::Cancelled) => lines.push("Last trade was cancelled.".to_string()),
            Some(TradeOutcome::Failed) => lines.push("Last trade failed.".to_string()),
            None => lines.push("No active trade.".to_string()),
        },
    }

    if let Some(progress) = &projection.progress {
        lines.push(progress_bar(progress.percent));
        lines.push(stage_tracker(progress.stage));
    }

    if let Some(details) = &projection.match_details {
        lines.push(format!(
            "Matched: {} {} -> {} {} @ {:.6} {}/{}",
            details.give_amount,
            details.give_currency,
            details.want_amount,
            details.want_currency,
            details.rate,
            details.want_currency,
            details.give_currency
        ));
    }

    if projection.submit_enabled {
        lines.push("trade <give_amount> <give_currency> <want_amount> <want_currency>".to_string());
    } else {
        lines.push("Submitting...".to_string());
    }
    if state.active_trade.is_some() {
        lines.push("cancel: cancel this offer".to_string());
    }

    lines
}
