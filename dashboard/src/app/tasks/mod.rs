//! # Async Tasks
//!
//! Background work spawned by the trade controller: the status poll loop and
//! the full data refresh.

pub mod poll;
pub mod refresh;

pub use poll::{PollCounters, PollHandle, PollOutcome};
pub use refresh::{refresh_all, RefreshReport};
