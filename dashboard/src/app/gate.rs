//! Currency gate: whether an action in a currency needs a trust line first.

use shared::dto::TrustLine;
use shared::{is_native_currency, normalize_currency};

/// `true` when trading or receiving `currency` is blocked until a trust line
/// for it exists. The native asset and an empty code are never gated.
pub fn requires_trustline(currency: &str, trustlines: &[TrustLine]) -> bool {
    let currency = normalize_currency(currency);
    if currency.is_empty() || is_native_currency(&currency) {
        return false;
    }
    !trustlines
        .iter()
        .any(|line| normalize_currency(&line.currency) == currency)
}

/// Currencies from `candidates` that are still gated, deduplicated, in order.
pub fn gated_currencies<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    trustlines: &[TrustLine],
) -> Vec<String> {
    let mut gated: Vec<String> = Vec::new();
    for currency in candidates {
        let code = normalize_currency(currency);
        if requires_trustline(&code, trustlines) && !gated.contains(&code) {
            gated.push(code);
        }
    }
    gated
}
