//! # Trust Lines Screen
//!
//! Existing trust lines, plus the gate region listing registry currencies
//! that cannot be traded until a trust line is opened.

use shared::utils::truncate_address;

use crate::app::gate::gated_currencies;
use crate::app::AppState;

/// Gate lines for the currencies the wallet knows about.
///
/// Empty until the wallet summary is loaded.
pub fn gate_lines(state: &AppState) -> Vec<String> {
    let Some(wallet) = &state.wallet else {
        return Vec::new();
    };
    let gated = gated_currencies(wallet.token_registry.keys().map(String::as_str), state.trustlines());
    if gated.is_empty() {
        return Vec::new();
    }
    gated
        .iter()
        .map(|currency| format!("{} locked: requires a trust line (enable {})", currency, currency))
        .collect()
}

pub fn render(state: &AppState) -> Vec<String> {
    let lines_held = state.trustlines();
    let mut lines = Vec::new();

    if lines_held.is_empty() {
        lines.push("No trust lines.".to_string());
    }
    for line in lines_held {
        lines.push(format!(
            "  {:<6} balance {:>14}  limit {:<12} issuer {}",
            line.currency,
            line.balance,
            line.limit,
            truncate_address(&line.issuer)
        ));
    }
    lines.push("enable <currency> [issuer] [limit]: open a trust line".to_string());
    lines
}
