//! Checkout stage
//!
//! - **session**: the `Editing → Processing → Placed` state machine
//! - **submitter**: the opaque async gateway that finalizes an order
//! - **error**: validation, state and gateway errors
//!
//! # Data Flow
//!
//! 1. Menu stage hands over `(CartLedger, Arc<Catalog>)`
//! 2. Customer edits quantities, fills the form, picks UPI or card
//! 3. `submit` validates and freezes the session (`Processing`)
//! 4. The submitter runs; cancellation abandons the session
//! 5. Success places the order and consumes the ledger; failure returns
//!    to `Editing` with a reason code

pub mod error;
pub mod session;
pub mod submitter;

pub use error::{CheckoutError, SubmissionError, ValidationError};
pub use session::{CheckoutSession, CheckoutSettings};
pub use submitter::{OrderSubmitter, SimulatedSubmitter, SubmissionAck};
