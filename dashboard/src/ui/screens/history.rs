//! # History Screen
//!
//! Ledger transactions, newest first. Ledger timestamps count seconds from
//! 2000-01-01 and are converted with [`ripple_time_to_utc`].

use chrono::{DateTime, Utc};
use shared::dto::HistoryEntry;
use shared::utils::{format_address, ripple_time_to_utc};

use crate::app::AppState;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn ledger_time(entry: &HistoryEntry) -> String {
    entry
        .tx
        .date
        .and_then(ripple_time_to_utc)
        .map(|time: DateTime<Utc>| time.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One line per entry, newest first. Entries without a date sort last.
pub fn entry_lines(history: &[HistoryEntry]) -> Vec<String> {
    let mut entries: Vec<&HistoryEntry> = history.iter().collect();
    // Stable sort keeps backend order among equal timestamps
    entries.sort_by(|a, b| b.tx.date.cmp(&a.tx.date));

    entries
        .into_iter()
        .map(|entry| {
            let result = match entry.meta.transaction_result.as_str() {
                "" => "?",
                other => other,
            };
            format!(
                "  {}  {:<14} {:<12} {}",
                ledger_time(entry),
                entry.tx.transaction_type,
                result,
                format_address(&entry.tx.hash, 8, 4)
            )
        })
        .collect()
}

pub fn render(state: &AppState) -> Vec<String> {
    if state.history.is_empty() {
        return vec!["No transactions yet.".to_string()];
    }
    let mut lines = vec![format!("{} transactions:", state.history.len())];
    lines.extend(entry_lines(&state.history));
    lines
}
