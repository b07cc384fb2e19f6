//! Shopping cart types.
//!
//! The cart lives in the session and holds full toy snapshots, so cart
//! pages render without re-fetching the catalog. Lines are unique by
//! product ID and quantities never drop below one: an update that would
//! reach zero removes the line instead.

use serde::{Deserialize, Serialize};

use toymix_core::{Price, ProductId};

use super::product::Toy;

/// A single cart line: one toy and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub toy: Toy,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.toy.price.times(self.quantity)
    }
}

/// The shopping cart.
///
/// Lines keep insertion order so the cart page renders in the order
/// items were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Add a toy to the cart.
    ///
    /// If a line with the same product ID exists, its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, toy: Toy) {
        if let Some(item) = self.items.iter_mut().find(|item| item.toy.id == toy.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem { toy, quantity: 1 });
        }
    }

    /// Apply a quantity delta to the line with the given product ID.
    ///
    /// A resulting quantity of zero or less removes the line. Unknown
    /// IDs are ignored.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) {
        let Some(current) = self.quantity_of(id) else {
            return;
        };

        let updated = i64::from(current) + i64::from(delta);
        if updated <= 0 {
            self.remove(id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.toy.id == id) {
            item.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line with the given product ID.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.toy.id != id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items
            .iter()
            .fold(Price::ZERO, |sum, item| sum.saturating_add(item.line_total()))
    }

    /// Quantity of the line with the given product ID, if present.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.toy.id == id)
            .map(|item| item.quantity)
    }
}
