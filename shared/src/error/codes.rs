//! Unified error codes for the ordering engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / checkout errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so an embedding UI can
/// localize them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Order is empty
    OrderEmpty = 4001,
    /// Customer name is missing
    CustomerNameRequired = 4002,
    /// Order is being processed and cannot change
    OrderProcessing = 4003,
    /// Order has already been placed
    OrderAlreadyPlaced = 4004,
    /// Order submission was cancelled
    OrderCancelled = 4005,
    /// Transition not allowed from the current state
    InvalidOrderState = 4006,

    // ==================== 5xxx: Payment ====================
    /// Payment method not selected
    PaymentMethodRequired = 5001,
    /// Payment was declined
    PaymentDeclined = 5002,
    /// Payment gateway timed out
    PaymentTimeout = 5003,
    /// Payment gateway unavailable
    PaymentUnavailable = 5004,

    // ==================== 6xxx: Catalog ====================
    /// Duplicate menu entry id
    DuplicateMenuEntry = 6001,
    /// Catalog data could not be parsed
    InvalidCatalog = 6002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",

            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::CustomerNameRequired => "Customer name is required",
            ErrorCode::OrderProcessing => "Order is being processed",
            ErrorCode::OrderAlreadyPlaced => "Order has already been placed",
            ErrorCode::OrderCancelled => "Order submission was cancelled",
            ErrorCode::InvalidOrderState => "Operation not allowed in the current order state",

            ErrorCode::PaymentMethodRequired => "Payment method is required",
            ErrorCode::PaymentDeclined => "Payment was declined",
            ErrorCode::PaymentTimeout => "Payment timed out",
            ErrorCode::PaymentUnavailable => "Payment service unavailable",

            ErrorCode::DuplicateMenuEntry => "Duplicate menu entry",
            ErrorCode::InvalidCatalog => "Invalid catalog data",

            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            4001 => Ok(ErrorCode::OrderEmpty),
            4002 => Ok(ErrorCode::CustomerNameRequired),
            4003 => Ok(ErrorCode::OrderProcessing),
            4004 => Ok(ErrorCode::OrderAlreadyPlaced),
            4005 => Ok(ErrorCode::OrderCancelled),
            4006 => Ok(ErrorCode::InvalidOrderState),

            5001 => Ok(ErrorCode::PaymentMethodRequired),
            5002 => Ok(ErrorCode::PaymentDeclined),
            5003 => Ok(ErrorCode::PaymentTimeout),
            5004 => Ok(ErrorCode::PaymentUnavailable),

            6001 => Ok(ErrorCode::DuplicateMenuEntry),
            6002 => Ok(ErrorCode::InvalidCatalog),

            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
