//! # Ledger Dashboard - Binary Entry Point
//!
//! Line-oriented shell over the dashboard library.
//!
//! ```text
//! input thread ──AppEvent──▶ main loop ──App calls──▶ StateStore
//!                                                        │ revision
//!                                           view_sync ◀──┘ prints frames
//! ```

use std::io::BufRead;
use std::process::ExitCode;

use dashboard::app::{App, AppEvent, Flow};
use dashboard::core::DashboardConfig;
use dashboard::debug::{self, spawn_tracked};
use dashboard::ui::ViewSynchronizer;

#[tokio::main]
async fn main() -> ExitCode {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = debug::init();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        api_url = %config.api_url,
        debug_mode = debug::is_debug_mode(),
        "Starting dashboard"
    );

    let app = App::new(&config);

    match app.resume().await {
        Ok(Some(username)) => println!("Resumed session for {}", username),
        Ok(None) => {}
        Err(e) => eprintln!("Could not resume session: {}", e.user_message()),
    }

    let view_task = spawn_tracked(
        "view_sync",
        ViewSynchronizer::run(app.store().clone(), app.controller().clone(), |view| {
            println!("\n{}\n", view);
        }),
    );

    // Blocking stdin reads stay off the runtime
    let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read input");
                    break;
                }
            };
            if let Some(event) = AppEvent::from_line(&line) {
                if event_tx.send_blocking(event).is_err() {
                    return;
                }
            }
        }
        let _ = event_tx.send_blocking(AppEvent::InputClosed);
    });

    while let Ok(event) = event_rx.recv().await {
        let reply = app.handle_event(event).await;
        if let Some(output) = reply.output {
            println!("{}", output);
        }
        if reply.flow == Flow::Quit {
            break;
        }
    }

    tracing::info!(active_tasks = debug::active_task_count(), "Shutting down");
    app.shutdown();
    view_task.abort();
    ExitCode::SUCCESS
}
