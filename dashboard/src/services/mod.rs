//! # Services Module
//!
//! External integrations of the dashboard client.
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP API client
//! │                 (login, trades, wallet summary, history, trust lines)
//! └── session.rs  - Persisted username (the only durable client state)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Dashboard client                     │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  ApiClient       │       │  SessionStore    │        │
//! │  │  (api/)          │       │  (session.rs)    │        │
//! │  └────────┬─────────┘       └────────┬─────────┘        │
//! └───────────┼──────────────────────────┼──────────────────┘
//!             │ HTTP/JSON                │ JSON file
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  Ledger backend     │    │  dashboard-session.json     │
//! │  /api/auth/*        │    └─────────────────────────────┘
//! │  /api/trade/*       │
//! │  /api/wallet/*      │
//! │  /api/trustline/*   │
//! └─────────────────────┘
//! ```
//!
//! The backend owns every ledger operation; nothing here signs or submits
//! transactions directly.

pub mod api;
pub mod session;
