//! Cart Ledger
//!
//! Mapping from menu entry id to a positive quantity. A key whose quantity
//! would drop to zero is deleted, so the ledger never holds a zero entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client-side cart: entry id -> quantity (>= 1)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct CartLedger {
    items: BTreeMap<String, u32>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by one, inserting at 1 if absent
    ///
    /// Never fails; catalog membership is checked by the caller. Returns the
    /// new quantity.
    pub fn add(&mut self, id: &str) -> u32 {
        let qty = self.items.entry(id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
        tracing::debug!(item_id = %id, quantity = *qty, "Cart item added");
        *qty
    }

    /// Decrement by one, deleting the key when it reaches zero
    ///
    /// Absent keys are left alone. Returns the remaining quantity (0 when the
    /// key is gone).
    pub fn remove(&mut self, id: &str) -> u32 {
        let Some(qty) = self.items.get_mut(id) else {
            return 0;
        };
        if *qty > 1 {
            *qty -= 1;
            tracing::debug!(item_id = %id, quantity = *qty, "Cart item decremented");
            *qty
        } else {
            self.items.remove(id);
            tracing::debug!(item_id = %id, "Cart item removed");
            0
        }
    }

    /// Set an exact quantity; zero deletes the key
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            if self.items.remove(id).is_some() {
                tracing::debug!(item_id = %id, "Cart item removed");
            }
        } else {
            self.items.insert(id.to_string(), quantity);
            tracing::debug!(item_id = %id, quantity, "Cart item quantity set");
        }
    }

    /// Quantity of `id`, 0 when absent
    pub fn quantity(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Sum of all quantities
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `(id, quantity)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, &q)| (id.as_str(), q))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<BTreeMap<String, u32>> for CartLedger {
    fn from(mut items: BTreeMap<String, u32>) -> Self {
        items.retain(|_, q| *q > 0);
        Self { items }
    }
}

impl From<CartLedger> for BTreeMap<String, u32> {
    fn from(ledger: CartLedger) -> Self {
        ledger.items
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for CartLedger {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let items: BTreeMap<String, u32> = iter.into_iter().map(|(id, q)| (id.into(), q)).collect();
        items.into()
    }
}
