//! # Header Widget
//!
//! Title line plus account and balance summary.

use shared::utils::{format_address, NATIVE_CURRENCY};

use crate::app::AppState;

pub const TITLE: &str = "LEDGER DASHBOARD";

/// Header lines: title/user line, then balances when the wallet is loaded.
pub fn render_header(state: &AppState) -> Vec<String> {
    let mut lines = Vec::new();

    let user = match state.username.as_deref() {
        Some(name) => format!("user: {}", name),
        None => "not logged in".to_string(),
    };
    lines.push(format!("{} | {} | {}", TITLE, state.current_screen.title(), user));

    if !state.is_authenticated() {
        return lines;
    }

    match &state.wallet {
        Some(wallet) => {
            let mut account = format!("account: {}", format_address(&wallet.address, 6, 6));
            if let Some(phone) = wallet.phone.as_deref().filter(|p| !p.is_empty()) {
                account.push_str(&format!(" | phone: {}", phone));
            }
            account.push_str(&format!(" | open offers: {}", wallet.open_offers_count));
            lines.push(account);

            let mut balances = vec![format!("{} {:.6}", NATIVE_CURRENCY, wallet.xrp_balance)];
            balances.extend(
                wallet
                    .token_balances
                    .iter()
                    .map(|token| format!("{} {}", token.currency, token.balance)),
            );
            lines.push(format!("balances: {}", balances.join(" | ")));
        }
        None => lines.push("wallet: loading...".to_string()),
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WalletState;
    use shared::dto::TrustLine;

    #[test]
    fn test_logged_out_header_is_one_line() {
        let lines = render_header(&AppState::default());
        assert_eq!(lines, vec!["LEDGER DASHBOARD | Welcome | not logged in".to_string()]);
    }

    #[test]
    fn test_balances_line() {
        let state = AppState {
            username: Some("alice".to_string()),
            wallet: Some(WalletState {
                address: "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh".to_string(),
                xrp_balance: 12.5,
                token_balances: vec![TrustLine {
                    currency: "USD".to_string(),
                    balance: "3".to_string(),
                    ..TrustLine::default()
                }],
                ..WalletState::default()
            }),
            ..AppState::default()
        };

        let lines = render_header(&state);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("rHb9CJ...wdtyTh"));
        assert_eq!(lines[2], "balances: XRP 12.500000 | USD 3");
    }
}
