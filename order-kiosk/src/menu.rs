//! Menu stage
//!
//! Owns the filter bar state and a fresh cart ledger. Leaving for checkout
//! copies the ledger into a [`CheckoutHandoff`] together with the shared
//! catalog reference.

use crate::cart::{CartLedger, CartTotals, TaxRate};
use crate::catalog::{Catalog, FilterState};
use crate::checkout::ValidationError;
use shared::models::{GroupFilter, MenuEntry};
use std::sync::Arc;

/// Snapshot passed from the menu stage to the checkout stage
#[derive(Debug, Clone)]
pub struct CheckoutHandoff {
    pub ledger: CartLedger,
    pub catalog: Arc<Catalog>,
}

#[derive(Debug)]
pub struct MenuSession {
    catalog: Arc<Catalog>,
    filter: FilterState,
    ledger: CartLedger,
    tax_rate: TaxRate,
}

impl MenuSession {
    /// Start with an empty cart and no filters
    pub fn new(catalog: Arc<Catalog>, tax_rate: TaxRate) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            ledger: CartLedger::new(),
            tax_rate,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    // ========== Filter bar ==========

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
    }

    pub fn select_group(&mut self, group: GroupFilter) {
        self.filter.set_group(group);
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filter.toggle_category(category);
    }

    pub fn toggle_veg_only(&mut self) {
        self.filter.toggle_veg_only();
    }

    pub fn clear_filters(&mut self) {
        self.filter.reset();
    }

    /// Entries to render, recomputed from the current filter state
    pub fn visible_entries(&self) -> Vec<&MenuEntry> {
        self.filter.apply(&self.catalog)
    }

    // ========== Cart ==========

    pub fn add_to_cart(&mut self, id: &str) -> u32 {
        if !self.catalog.contains(id) {
            tracing::warn!(item_id = %id, "Adding id that is not on the menu");
        }
        self.ledger.add(id)
    }

    pub fn remove_from_cart(&mut self, id: &str) -> u32 {
        self.ledger.remove(id)
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.ledger.quantity(id)
    }

    /// Cart badge figures
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.ledger, &self.catalog, self.tax_rate)
    }

    /// Copy the cart into a checkout handoff; refused while the cart is empty
    pub fn proceed_to_checkout(&self) -> Result<CheckoutHandoff, ValidationError> {
        if self.ledger.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        tracing::info!(
            items = self.ledger.item_count(),
            "Proceeding to checkout"
        );
        Ok(CheckoutHandoff {
            ledger: self.ledger.clone(),
            catalog: Arc::clone(&self.catalog),
        })
    }
}
