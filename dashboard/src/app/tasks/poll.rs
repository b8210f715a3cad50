//! # Poll Loop
//!
//! One spawned task per active trade. Each iteration sleeps for the poll
//! interval, then awaits one tick to completion before sleeping again, so ticks
//! never overlap.
//!
//! [`PollHandle::cancel`] wakes the sleep and ends the loop. A tick that is
//! already awaiting the backend is not aborted; the tick itself must notice
//! that it has been superseded and return [`PollOutcome::Stale`].

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::debug::spawn_tracked;

/// What a tick decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Keep polling
    Continue,
    /// Terminal status handled; end the loop
    Stop,
    /// The loop no longer owns the active trade; end it without side effects
    Stale,
}

/// Started/stopped loop counters, shared by every loop of one controller.
#[derive(Debug, Default)]
pub struct PollCounters {
    started: AtomicUsize,
    stopped: AtomicUsize,
}

impl PollCounters {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn stopped(&self) -> usize {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Loops that may still schedule a tick.
    pub fn live(&self) -> usize {
        self.started().saturating_sub(self.stopped())
    }
}

/// Counts a loop as stopped exactly once, whether it was cancelled or exited.
struct LiveSlot {
    counters: Arc<PollCounters>,
    released: AtomicBool,
}

impl LiveSlot {
    fn acquire(counters: Arc<PollCounters>) -> Arc<Self> {
        counters.started.fetch_add(1, Ordering::SeqCst);
        Arc::new(Self {
            counters,
            released: AtomicBool::new(false),
        })
    }

    fn release(&self) -> bool {
        let first = !self.released.swap(true, Ordering::SeqCst);
        if first {
            self.counters.stopped.fetch_add(1, Ordering::SeqCst);
        }
        first
    }
}

struct ReleaseOnDrop(Arc<LiveSlot>);

impl Drop for ReleaseOnDrop {
    fn drop(&mut self) {
        self.0.release();
    }
}

/// Handle to a running poll loop.
///
/// Dropping the handle also ends the loop at its next wake-up. The task is
/// never aborted, so a tick already in progress runs to completion.
pub struct PollHandle {
    generation: u64,
    offer_sequence: u64,
    cancel_tx: watch::Sender<bool>,
    slot: Arc<LiveSlot>,
    join: JoinHandle<()>,
}

impl PollHandle {
    /// Stop scheduling ticks. Returns `false` if the loop was already stopped.
    pub fn cancel(&self) -> bool {
        let _ = self.cancel_tx.send(true);
        let released = self.slot.release();
        if released {
            tracing::debug!(
                generation = self.generation,
                offer_sequence = self.offer_sequence,
                "Poll loop cancelled"
            );
        }
        released
    }

    /// Whether the loop task has exited.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl std::fmt::Debug for PollHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollHandle")
            .field("generation", &self.generation)
            .field("offer_sequence", &self.offer_sequence)
            .finish()
    }
}

/// Spawn a loop calling `tick` every `interval` until cancelled or a tick
/// returns something other than [`PollOutcome::Continue`].
pub fn spawn_poll_loop<F, Fut>(
    generation: u64,
    offer_sequence: u64,
    interval: Duration,
    counters: Arc<PollCounters>,
    mut tick: F,
) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = PollOutcome> + Send + 'static,
{
    let (cancel_tx, mut cancel_rx) = watch::channel(false);
    let slot = LiveSlot::acquire(counters);
    let release = ReleaseOnDrop(slot.clone());

    tracing::info!(generation, offer_sequence, interval_ms = interval.as_millis() as u64, "Poll loop started");

    let join = spawn_tracked("trade_poll", async move {
        let _release = release;
        let mut ticks: u64 = 0;

        loop {
            tokio::select! {
                biased;
                changed = cancel_rx.changed() => {
                    // Err means the handle was dropped
                    if changed.is_err() || *cancel_rx.borrow() {
                        break;
                    }
                }
                _ = tokio::time::sleep(interval) => {}
            }

            if *cancel_rx.borrow() {
                break;
            }

            ticks += 1;
            match tick().await {
                PollOutcome::Continue => continue,
                outcome => {
                    tracing::debug!(generation, offer_sequence, ticks, ?outcome, "Poll loop finished");
                    break;
                }
            }
        }
    });

    PollHandle {
        generation,
        offer_sequence,
        cancel_tx,
        slot,
        join,
    }
}
