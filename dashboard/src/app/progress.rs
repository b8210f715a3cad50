//! Progress indicator and stage tracker derived from offer status.

use shared::dto::OfferStatus;

use crate::app::state::TradeProgress;

/// Labels of the four-stage tracker, indexed by [`stage_index`].
pub const STAGES: [&str; 4] = ["Submitted", "On ledger", "Matching", "Settled"];

/// Progress bar percentage for a status.
pub fn progress_percent(status: OfferStatus) -> u8 {
    match status {
        OfferStatus::Submitted => 15,
        OfferStatus::Open => 45,
        OfferStatus::PartiallyFilled => 75,
        OfferStatus::Filled => 100,
        OfferStatus::Cancelled | OfferStatus::Failed => 0,
    }
}

/// Active tracker stage. Cancelled and failed offers have none.
pub fn stage_index(status: OfferStatus) -> Option<usize> {
    match status {
        OfferStatus::Submitted => Some(0),
        OfferStatus::Open => Some(1),
        OfferStatus::PartiallyFilled => Some(2),
        OfferStatus::Filled => Some(3),
        OfferStatus::Cancelled | OfferStatus::Failed => None,
    }
}

pub fn progress_for(status: OfferStatus) -> TradeProgress {
    TradeProgress {
        status,
        percent: progress_percent(status),
        stage: stage_index(status),
    }
}

/// Exchange rate `want / give` from the submitted amounts.
///
/// Returns `None` when either amount is unparseable or `give` is zero.
pub fn exchange_rate(give_amount: &str, want_amount: &str) -> Option<f64> {
    let give: f64 = give_amount.trim().parse().ok()?;
    let want: f64 = want_amount.trim().parse().ok()?;
    if give == 0.0 || !give.is_finite() || !want.is_finite() {
        return None;
    }
    Some(want / give)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_table() {
        let table = [
            (OfferStatus::Submitted, 15, Some(0)),
            (OfferStatus::Open, 45, Some(1)),
            (OfferStatus::PartiallyFilled, 75, Some(2)),
            (OfferStatus::Filled, 100, Some(3)),
            (OfferStatus::Cancelled, 0, None),
            (OfferStatus::Failed, 0, None),
        ];

        for (status, percent, stage) in table {
            assert_eq!(progress_percent(status), percent, "{status}");
            assert_eq!(stage_index(status), stage, "{status}");
            assert_eq!(progress_for(status), TradeProgress { status, percent, stage });
        }
    }

    #[test]
    fn test_exchange_rate() {
        assert_eq!(exchange_rate("100", "250"), Some(2.5));
        assert_eq!(exchange_rate("0", "250"), None);
        assert_eq!(exchange_rate("abc", "250"), None);
    }
}
