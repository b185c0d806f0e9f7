//! Shared types for the checkout stage

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Payment
// ============================================================================

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// UPI payment
    Upi,
    /// Credit/debit card
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a submission failed at the payment/order gateway
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionFailure {
    /// Payment declined by the gateway
    Declined,
    /// Gateway did not answer in time
    TimedOut,
    /// Gateway unreachable
    Unavailable,
}

// ============================================================================
// Checkout State
// ============================================================================

/// Checkout session state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutStatus {
    /// Form and cart are editable
    #[default]
    Editing,
    /// Submission in flight; cart and form are frozen
    Processing,
    /// Order placed; terminal
    Placed,
    /// Submission cancelled because the session was left; terminal
    Abandoned,
}

impl CheckoutStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckoutStatus::Placed | CheckoutStatus::Abandoned)
    }
}

// ============================================================================
// Order Form
// ============================================================================

/// Customer details collected on the checkout screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

impl OrderForm {
    pub fn new(customer_name: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            table_number: None,
            special_requirements: None,
        }
    }

    pub fn with_table_number(mut self, table: impl Into<String>) -> Self {
        self.table_number = normalize_optional(table.into());
        self
    }

    pub fn with_special_requirements(mut self, note: impl Into<String>) -> Self {
        self.special_requirements = normalize_optional(note.into());
        self
    }

    /// Customer name with surrounding whitespace removed
    pub fn trimmed_name(&self) -> &str {
        self.customer_name.trim()
    }

    /// Any non-empty input counts, whitespace included
    pub fn has_customer_name(&self) -> bool {
        !self.customer_name.is_empty()
    }
}

/// Blank input means "not provided"
pub fn normalize_optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Order Draft
// ============================================================================

/// One priced line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub entry_id: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

/// Finalized order handed to the submission gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDraft {
    pub order_id: String,
    pub form: OrderForm,
    pub payment_method: PaymentMethod,
    pub lines: Vec<OrderLine>,
    pub item_count: u64,
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_fields_become_none() {
        let form = OrderForm::new("Asha")
            .with_table_number("   ")
            .with_special_requirements("");
        assert_eq!(form.table_number, None);
        assert_eq!(form.special_requirements, None);
    }

    #[test]
    fn test_optional_fields_are_trimmed() {
        let form = OrderForm::new("Asha").with_table_number(" T-15 ");
        assert_eq!(form.table_number.as_deref(), Some("T-15"));
    }

    #[test]
    fn test_only_empty_name_is_missing() {
        assert!(!OrderForm::new("").has_customer_name());
        assert!(OrderForm::new("  ").has_customer_name());
        assert!(OrderForm::new(" Ravi ").has_customer_name());
    }

    #[test]
    fn test_payment_method_serde() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), "\"upi\"");
        let m: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(m, PaymentMethod::Card);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!CheckoutStatus::Editing.is_terminal());
        assert!(!CheckoutStatus::Processing.is_terminal());
        assert!(CheckoutStatus::Placed.is_terminal());
        assert!(CheckoutStatus::Abandoned.is_terminal());
    }
}
