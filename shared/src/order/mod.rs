//! Checkout types
//!
//! This module provides the types exchanged between the checkout stage and
//! whatever gateway finalizes an order:
//! - Form / payment: what the customer filled in
//! - Draft: the priced order handed to the gateway
//! - Receipt / outcome: what the checkout stage reports back

pub mod receipt;
pub mod types;

// Re-exports
pub use receipt::{CheckoutOutcome, OrderReceipt, ReadyWindow};
pub use types::*;
