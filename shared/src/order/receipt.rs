//! Order receipt and checkout outcome

use super::types::PaymentMethod;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estimated window in which the order will be ready
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadyWindow {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

impl ReadyWindow {
    /// Window of `[min_minutes, max_minutes]` after `placed_at`
    pub fn after(placed_at: DateTime<Utc>, min_minutes: u32, max_minutes: u32) -> Self {
        let (lo, hi) = if min_minutes <= max_minutes {
            (min_minutes, max_minutes)
        } else {
            (max_minutes, min_minutes)
        };
        Self {
            earliest: placed_at + chrono::Duration::minutes(i64::from(lo)),
            latest: placed_at + chrono::Duration::minutes(i64::from(hi)),
        }
    }

    /// Window length rendered like "15-20 mins"
    pub fn describe_from(&self, placed_at: DateTime<Utc>) -> String {
        let lo = (self.earliest - placed_at).num_minutes();
        let hi = (self.latest - placed_at).num_minutes();
        format!("{}-{} mins", lo, hi)
    }
}

/// Confirmation of a placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: String,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    pub payment_method: PaymentMethod,
    pub item_count: u64,
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
    pub placed_at: DateTime<Utc>,
    pub ready: ReadyWindow,
}

/// The single outcome of a submit attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutOutcome {
    /// Order confirmed with estimated ready time
    Confirmed { receipt: OrderReceipt },
    /// Submission rejected; the reason carries the code for the UI
    Rejected { reason: AppError },
}

impl CheckoutOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CheckoutOutcome::Confirmed { .. })
    }

    pub fn receipt(&self) -> Option<&OrderReceipt> {
        match self {
            CheckoutOutcome::Confirmed { receipt } => Some(receipt),
            CheckoutOutcome::Rejected { .. } => None,
        }
    }
}
