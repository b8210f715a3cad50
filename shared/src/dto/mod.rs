//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the dashboard client and the ledger backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response wrapper carrying `success`, `data` and `error`
//! - [`auth`] - Login
//! - [`trade`] - Swap offers and their lifecycle status
//! - [`wallet`] - Wallet summary, balances, trust lines and history
//! - [`trustline`] - Issuer checks and trust line creation
//! - [`payment`] - Direct XRP and token payments
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/trade/create
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "give_currency": "XRP",
//!   "give_amount": "100",
//!   "want_currency": "USD",
//!   "want_amount": "250"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "data": {
//!     "message": "Offer created",
//!     "offer_sequence": 42,
//!     "tx_hash": "E3FE6EA3D48F0C2B639448020EA4F03D4F4F8FFDB243A852A0F59177921B4879"
//!   }
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod payment;
pub mod trade;
pub mod trustline;
pub mod wallet;

pub use auth::*;
pub use envelope::*;
pub use payment::*;
pub use trade::*;
pub use trustline::*;
pub use wallet::*;
