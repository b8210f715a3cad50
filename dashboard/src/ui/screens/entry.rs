//! Entry (login) screen.

use crate::app::AppState;

pub fn render(state: &AppState) -> Vec<String> {
    if state.is_authenticated() {
        return vec!["Already logged in. Type `dashboard` to continue.".to_string()];
    }
    vec![
        "Welcome. Log in to view your wallet and trade.".to_string(),
        "  login <username> <password>".to_string(),
        "Type `help` for all commands.".to_string(),
    ]
}
