//! # Ledger Dashboard - Library Root
//!
//! Client for a ledger payment network backend: wallet summary, trust lines,
//! open offers, history, and the lifecycle of a single swap offer from
//! submission to fill or cancellation.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime, poll timers            │
//! │  Reqwest       - HTTP client                           │
//! │  parking_lot   - State store locks                     │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON envelope {success, data | error})
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │  /api/trade/*, /api/wallet/*,
//! │                 │  /api/auth/login, /api/trustline/*,
//! │                 │  /api/xrp/send, /api/token/send
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state store, trade controller, handlers, tasks
//! - **core**: Configuration, error types and the `ApiService` trait
//! - **debug**: Logging setup and tracked task spawning
//! - **services**: Backend HTTP client and the session file
//! - **ui**: Text rendering of state snapshots (`ViewSynchronizer`)
//! - **utils**: Input validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, controller, commands)
//!   │   ├── services::api (HTTP requests)
//!   │   └── services::session (persisted username)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (dashboard, trade, offers, history, trust lines)
//!       └── widgets::* (header, progress, status bar)
//! ```
//!
//! ## Core Concepts
//!
//! ### State Management
//!
//! Application state lives in one [`app::StateStore`]:
//! - **Named mutators**: every write is one short critical section
//! - **Snapshots**: readers get an owned clone
//! - **Revision channel**: the view redraws when the revision changes
//!
//! ### Trade Lifecycle
//!
//! [`app::TradeController`] drives `Idle → Submitting → Polling →
//! (PartiallyFilled) → Idle`. One poll task exists per active trade; a
//! generation counter discards results that arrive after a stop or restart.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
