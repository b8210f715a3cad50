//! # Event Handlers
//!
//! User-action handlers organized by domain. Trade lifecycle actions live in
//! [`crate::app::controller`]; everything else is here.

pub mod auth;
pub mod navigation;
pub mod offers;
pub mod payment;
pub mod trustline;
