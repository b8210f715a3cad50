//! # Dashboard Screen
//!
//! Wallet overview: token balances against their trust-line limits, the
//! active trade if any, and the most recent history entries.

use shared::utils::truncate_address;

use crate::app::AppState;
use crate::ui::screens::history;
use crate::ui::widgets::progress_bar;

const RECENT_HISTORY: usize = 3;

pub fn render(state: &AppState) -> Vec<String> {
    let mut lines = Vec::new();

    let Some(wallet) = &state.wallet else {
        lines.push("Wallet not loaded yet. Type `refresh` to retry.".to_string());
        return lines;
    };

    lines.push("Tokens:".to_string());
    if wallet.token_balances.is_empty() {
        lines.push("  (no issued tokens)".to_string());
    }
    for token in &wallet.token_balances {
        let limit = wallet
            .trustlines
            .iter()
            .find(|line| line.currency == token.currency && line.issuer == token.issuer)
            .map(|line| line.limit.as_str())
            .unwrap_or("-");
        lines.push(format!(
            "  {:<6} {:>14}  limit {:<12} issuer {}",
            token.currency,
            token.balance,
            limit,
            truncate_address(&token.issuer)
        ));
    }

    match (&state.active_trade, &state.trade.progress) {
        (Some(trade), Some(progress)) => lines.push(format!(
            "Active trade: #{} {} {} -> {} {} {}",
            trade.offer_sequence,
            trade.give_amount,
            trade.give_currency,
            trade.want_amount,
            trade.want_currency,
            progress_bar(progress.percent)
        )),
        (Some(trade), None) => lines.push(format!("Active trade: #{} {}", trade.offer_sequence, trade.status)),
        (None, _) => lines.push("No active trade.".to_string()),
    }

    if !state.history.is_empty() {
        lines.push("Recent activity:".to_string());
        lines.extend(history::entry_lines(&state.history).into_iter().take(RECENT_HISTORY));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WalletState;

    #[test]
    fn test_unloaded_wallet() {
        let state = AppState {
            username: Some("alice".to_string()),
            ..AppState::default()
        };
        assert!(render(&state)[0].contains("not loaded"));
    }

    #[test]
    fn test_no_tokens_no_trade() {
        let state = AppState {
            username: Some("alice".to_string()),
            wallet: Some(WalletState::default()),
            ..AppState::default()
        };
        assert_eq!(
            render(&state),
            vec!["Tokens:", "  (no issued tokens)", "No active trade."]
        );
    }
}
