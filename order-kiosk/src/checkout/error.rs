use shared::error::{AppError, ErrorCode};
use shared::order::SubmissionFailure;
use thiserror::Error;

/// Reasons a submit attempt is refused before anything is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Payment method is required")]
    MissingPaymentMethod,

    #[error("Cart is empty")]
    EmptyCart,
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingCustomerName => ErrorCode::CustomerNameRequired,
            ValidationError::MissingPaymentMethod => ErrorCode::PaymentMethodRequired,
            ValidationError::EmptyCart => ErrorCode::OrderEmpty,
        }
    }

    fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingCustomerName => Some("customer_name"),
            ValidationError::MissingPaymentMethod => Some("payment_method"),
            ValidationError::EmptyCart => None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err.field() {
            Some(field) => app.with_detail("field", field),
            None => app,
        }
    }
}

/// Failure reported by an order submitter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Submission failed ({failure:?}): {message}")]
pub struct SubmissionError {
    pub failure: SubmissionFailure,
    pub message: String,
}

impl SubmissionError {
    pub fn new(failure: SubmissionFailure, message: impl Into<String>) -> Self {
        Self {
            failure,
            message: message.into(),
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self::new(SubmissionFailure::Declined, message)
    }

    pub fn timed_out(message: impl Into<String>) -> Self {
        Self::new(SubmissionFailure::TimedOut, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SubmissionFailure::Unavailable, message)
    }

    pub fn code(&self) -> ErrorCode {
        match self.failure {
            SubmissionFailure::Declined => ErrorCode::PaymentDeclined,
            SubmissionFailure::TimedOut => ErrorCode::PaymentTimeout,
            SubmissionFailure::Unavailable => ErrorCode::PaymentUnavailable,
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        let reason = serde_json::to_value(err.failure).unwrap_or_default();
        AppError::with_message(err.code(), err.message).with_detail("reason", reason)
    }
}

/// Checkout session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Order is being processed")]
    Frozen,

    #[error("Order has already been placed")]
    Finalized,

    #[error("Checkout session was abandoned")]
    Abandoned,

    #[error("No submission in progress")]
    NotProcessing,

    #[error("Order submission cancelled")]
    Cancelled,
}

impl CheckoutError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::Validation(v) => v.code(),
            CheckoutError::Frozen => ErrorCode::OrderProcessing,
            CheckoutError::Finalized => ErrorCode::OrderAlreadyPlaced,
            CheckoutError::Abandoned | CheckoutError::NotProcessing => {
                ErrorCode::InvalidOrderState
            }
            CheckoutError::Cancelled => ErrorCode::OrderCancelled,
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Validation(v) => v.into(),
            other => AppError::with_message(other.code(), other.to_string()),
        }
    }
}
