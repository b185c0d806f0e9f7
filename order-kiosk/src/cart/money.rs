//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are whole currency units (`u64`). Tax is computed with `Decimal`
//! and rounded once, half-up, on the combined subtotal; per-line rounding
//! could differ by one unit.
//!
//! Everything here is derived on read from the current ledger and catalog;
//! nothing is cached.

use super::CartLedger;
use crate::catalog::Catalog;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::MenuEntry;
use shared::order::OrderLine;

/// Rounding strategy for tax (whole units, half-up)
const TAX_DECIMAL_PLACES: u32 = 0;

/// Default tax rate (5%)
pub const DEFAULT_TAX_PERCENT: u32 = 5;

/// Tax rate expressed as a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

impl TaxRate {
    pub fn from_percent(percent: u32) -> Self {
        Self(Decimal::from(percent))
    }

    /// Percentage value (5 = 5%)
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Tax owed on `subtotal`, rounded half-up to whole units
    pub fn tax_on(&self, subtotal: u64) -> u64 {
        let tax = Decimal::from(subtotal) * self.0 / Decimal::ONE_HUNDRED;
        tax.round_dp_with_strategy(TAX_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .unwrap_or_default()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::from_percent(DEFAULT_TAX_PERCENT)
    }
}

/// Derived cart figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all quantities
    pub item_count: u64,
    /// Sum of quantity × price
    pub subtotal: u64,
    pub tax: u64,
    /// subtotal + tax
    pub total: u64,
}

impl CartTotals {
    /// Recompute all figures from the ledger and catalog prices
    pub fn compute(ledger: &CartLedger, catalog: &Catalog, tax_rate: TaxRate) -> Self {
        let subtotal = subtotal(ledger, catalog);
        let tax = tax_rate.tax_on(subtotal);
        Self {
            item_count: ledger.item_count(),
            subtotal,
            tax,
            total: subtotal.saturating_add(tax),
        }
    }
}

/// Sum of quantity × price; ids missing from the catalog contribute zero
pub fn subtotal(ledger: &CartLedger, catalog: &Catalog) -> u64 {
    ledger
        .iter()
        .map(|(id, qty)| match catalog.price_of(id) {
            Some(price) => price.saturating_mul(u64::from(qty)),
            None => {
                tracing::trace!(item_id = %id, "Ledger id not in catalog, skipped");
                0
            }
        })
        .fold(0u64, u64::saturating_add)
}

/// One priced cart row for the checkout summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub entry: &'a MenuEntry,
    pub quantity: u32,
    pub line_total: u64,
}

impl CartLine<'_> {
    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            entry_id: self.entry.id.clone(),
            name: self.entry.name.clone(),
            unit_price: self.entry.price,
            quantity: self.quantity,
            line_total: self.line_total,
        }
    }
}

/// Priced rows in ledger order; ids missing from the catalog are skipped
pub fn cart_lines<'a>(ledger: &CartLedger, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
    ledger
        .iter()
        .filter_map(|(id, quantity)| {
            catalog.get(id).map(|entry| CartLine {
                entry,
                quantity,
                line_total: entry.price.saturating_mul(u64::from(quantity)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use shared::models::FoodGroup;

    fn two_item_catalog() -> Catalog {
        Catalog::new(vec![
            MenuEntry::new("A", "Alpha", "", 100, "Main Course", FoodGroup::Food, true),
            MenuEntry::new("B", "Beta", "", 200, "Main Course", FoodGroup::Food, false),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario_two_a_one_b() {
        let catalog = two_item_catalog();
        let mut ledger = CartLedger::new();
        ledger.add("A");
        ledger.add("A");
        ledger.add("B");

        assert_eq!(ledger.quantity("A"), 2);
        assert_eq!(ledger.quantity("B"), 1);

        let totals = CartTotals::compute(&ledger, &catalog, TaxRate::default());
        assert_eq!(
            totals,
            CartTotals {
                item_count: 3,
                subtotal: 400,
                tax: 20,
                total: 420,
            }
        );
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let rate = TaxRate::default();
        assert_eq!(rate.tax_on(0), 0);
        assert_eq!(rate.tax_on(9), 0); // 0.45
        assert_eq!(rate.tax_on(10), 1); // 0.5
        assert_eq!(rate.tax_on(30), 2); // 1.5
        assert_eq!(rate.tax_on(29), 1); // 1.45
        assert_eq!(rate.tax_on(1000), 50);
    }

    #[test]
    fn test_custom_tax_rate() {
        let rate = TaxRate::from_percent(18);
        assert_eq!(rate.tax_on(250), 45);
        assert_eq!(rate.percent(), Decimal::from(18));
    }

    #[test]
    fn test_unknown_id_contributes_zero() {
        let catalog = two_item_catalog();
        let ledger: CartLedger = [("A", 1), ("ghost", 4)].into_iter().collect();

        assert_eq!(subtotal(&ledger, &catalog), 100);
        let totals = CartTotals::compute(&ledger, &catalog, TaxRate::default());
        // the unknown id still counts towards the item count
        assert_eq!(totals.item_count, 5);
        assert_eq!(totals.total, 105);

        let lines = cart_lines(&ledger, &catalog);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].entry.id, "A");
    }

    #[test]
    fn test_totals_match_independent_recomputation() {
        let catalog = sample_catalog();
        let mut ledger = CartLedger::new();
        let script: [(&str, bool); 10] = [
            ("1", true),
            ("2", true),
            ("1", true),
            ("8", true),
            ("2", false),
            ("2", false),
            ("5", true),
            ("1", false),
            ("9", true),
            ("8", true),
        ];

        let mut expected_count: u64 = 0;
        for (id, is_add) in script {
            if is_add {
                ledger.add(id);
                expected_count += 1;
            } else if ledger.contains(id) {
                ledger.remove(id);
                expected_count -= 1;
            } else {
                ledger.remove(id);
            }

            let recomputed: u64 = ledger
                .iter()
                .map(|(id, q)| catalog.price_of(id).unwrap_or(0) * u64::from(q))
                .sum();
            let totals = CartTotals::compute(&ledger, &catalog, TaxRate::default());
            assert_eq!(totals.item_count, expected_count);
            assert_eq!(totals.subtotal, recomputed);
            assert_eq!(totals.total, totals.subtotal + totals.tax);
        }
    }

    #[test]
    fn test_cart_line_to_order_line() {
        let catalog = sample_catalog();
        let ledger: CartLedger = [("4", 3)].into_iter().collect();
        let lines = cart_lines(&ledger, &catalog);
        let line = lines[0].to_order_line();
        assert_eq!(line.name, "Mango Lassi");
        assert_eq!(line.unit_price, 120);
        assert_eq!(line.line_total, 360);
    }
}
