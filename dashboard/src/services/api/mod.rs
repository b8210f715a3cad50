//! # Backend API Client Module
//!
//! HTTP client for the ledger backend. Every response is a
//! `{ success, data, error }` envelope; every failure becomes a
//! [`RequestError`](crate::core::error::RequestError).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient, envelope decoding, ApiService impl
//! ├── auth.rs       - Login
//! ├── payment.rs    - Direct XRP and token payments
//! ├── trade.rs      - Swap create / status / cancel / open offers
//! ├── trustline.rs  - Issuer check and trust line creation
//! └── wallet.rs     - Wallet summary and history
//! ```

pub mod auth;
pub mod client;
pub mod payment;
pub mod trade;
pub mod trustline;
pub mod wallet;

pub use client::{decode_envelope, ApiClient};
