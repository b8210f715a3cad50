//! # Reusable UI Widgets
//!
//! Line-producing building blocks shared by the screens.

pub mod header;
pub mod progress;
pub mod status_bar;

pub use header::render_header;
pub use progress::{progress_bar, stage_tracker};
pub use status_bar::render_status_bar;

/// Horizontal rule used between regions.
pub fn divider(width: usize) -> String {
    "-".repeat(width)
}
