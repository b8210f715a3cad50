//! # Status Bar Widget
//!
//! Bottom line showing the trade phase and the latest status message.

use crate::app::{AppState, TradePhase};

/// Render status bar at bottom
pub fn render_status_bar(state: &AppState, phase: TradePhase) -> String {
    let mut line = format!("[trade: {}]", phase.label());

    if let Some(trade) = &state.active_trade {
        line.push_str(&format!(" [offer #{} {}]", trade.offer_sequence, trade.status));
    }

    match &state.status {
        Some(message) => line.push_str(&format!(" {}: {}", message.level.tag(), message.text)),
        None => line.push_str(" ready"),
    }

    line
}
