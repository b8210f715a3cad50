//! Async task lifecycle tracking for debugging hung tasks

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Get current number of tracked tasks still running
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// The task runs inside a span carrying its name, a numeric id and a random
/// `trace_id`, so every log line it emits can be correlated.
///
/// # Example
///
/// ```rust,ignore
/// spawn_tracked("refresh", async move {
///     refresh_all(api, store, username).await
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let trace_id = Uuid::new_v4();
    let start = Instant::now();
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);

    let span = tracing::info_span!("task", task = %name, task_id, trace_id = %trace_id);
    tracing::debug!(parent: &span, "Task spawned");

    tokio::spawn(
        async move {
            let result = future.await;
            let duration = start.elapsed();

            tracing::debug!(duration_ms = duration.as_millis() as u64, "Task completed");
            if duration.as_secs() > 30 {
                tracing::warn!(
                    duration_ms = duration.as_millis() as u64,
                    "Task took very long (potential hang)"
                );
            }

            ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
            result
        }
        .instrument(span),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_tracked_returns_output() {
        let handle = spawn_tracked("unit", async { 40 + 2 });
        assert_eq!(handle.await.expect("task should not panic"), 42);
    }

    #[tokio::test]
    async fn test_pending_task_is_counted() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = spawn_tracked("pending", async move {
            let _ = rx.await;
        });

        assert!(active_task_count() >= 1);
        let _ = tx.send(());
        handle.await.expect("task should not panic");
    }
}
