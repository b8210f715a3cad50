//! # Progress Widgets
//!
//! Progress bar and four-stage tracker for the trade screen.

use crate::app::progress::STAGES;

const BAR_WIDTH: usize = 20;

/// `[#########...........]  45%`
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Stage tracker; stages up to and including `stage` are marked done.
///
/// `None` (cancelled or failed) leaves every stage unmarked.
pub fn stage_tracker(stage: Option<usize>) -> String {
    STAGES
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mark = match stage {
                Some(current) if i < current => "x",
                Some(current) if i == current => ">",
                _ => " ",
            };
            format!("({}) {}", mark, label)
        })
        .collect::<Vec<_>>()
        .join(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0), "[....................]   0%");
        assert_eq!(progress_bar(45), "[#########...........]  45%");
        assert_eq!(progress_bar(100), "[####################] 100%");
    }

    #[test]
    fn test_stage_tracker_marks() {
        assert_eq!(
            stage_tracker(Some(1)),
            "(x) Submitted - (>) On ledger - ( ) Matching - ( ) Settled"
        );
        assert!(!stage_tracker(None).contains('x'));
    }
}
