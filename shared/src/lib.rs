//! Shared types for the menu ordering engine
//!
//! Catalog records, checkout types and the unified error codes used by
//! both the menu stage and the checkout stage.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{FoodGroup, GroupFilter, MenuEntry};
pub use order::{CheckoutOutcome, CheckoutStatus, OrderForm, OrderReceipt, PaymentMethod};
