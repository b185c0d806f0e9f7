//! Data models
//!
//! Catalog records shared between the menu and checkout stages.
//! All IDs are `String` (catalog-assigned).

pub mod category;
pub mod menu_entry;

// Re-exports
pub use category::*;
pub use menu_entry::*;
