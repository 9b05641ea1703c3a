//! Shopping cart.
//!
//! Cart rows are copies of product data at the time of add: later edits to
//! the catalog do not retroactively change what is in the bag.

use serde::{Deserialize, Serialize};

use emberkicks_core::{Price, ProductId};

use crate::models::Product;

/// A cart row: a snapshot of a product plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always >= 1; a row that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price x quantity for this row.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// An ordered sequence of cart rows, unique by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product: increments the existing row's quantity, or appends a
    /// new row with quantity 1. Row count grows by at most one.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::new(product));
        }
    }

    /// Remove a row entirely (not a decrement). Returns the removed row, or
    /// `None` if the product is not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartItem> {
        let index = self
            .items
            .iter()
            .position(|item| &item.product.id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Re-append a previously removed row at the end of the cart.
    pub fn restore(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The cart rows, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of rows (distinct products).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all rows (the bag badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line totals, before shipping.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
