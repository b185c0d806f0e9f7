//! Cart state
//!
//! - **ledger**: entry id -> quantity, with add / remove / set-quantity
//! - **money**: item count, subtotal, tax and total derived from the ledger

pub mod ledger;
pub mod money;

pub use ledger::CartLedger;
pub use money::{CartLine, CartTotals, TaxRate, cart_lines, subtotal};
