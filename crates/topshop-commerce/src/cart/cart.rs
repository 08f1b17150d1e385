//! Cart state and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// The product, as it was when first added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u64,
}

impl LineItem {
    fn new(product: Product, quantity: u64) -> Self {
        Self { product, quantity }
    }

    /// Product identifier of this line.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price multiplied by quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// Ordered line items, one per distinct product, in the order first added.
///
/// Only `CartStore` mutates a `CartState`; everything here keeps the
/// invariants (no duplicate products, no line with quantity 0). A cart can be
/// serialized for display but never built from outside data:
///
/// ```compile_fail
/// use topshop_commerce::prelude::CartState;
/// let cart: CartState = serde_json::from_str(r#"{"items": []}"#).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line item by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(Currency::USD), |acc, i| acc + i.subtotal())
    }

    /// Add `quantity` units of a product, merging with an existing line.
    pub(crate) fn add(&mut self, product: Product, quantity: u64) {
        if quantity == 0 {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }
        self.items.push(LineItem::new(product, quantity));
    }

    /// Remove a line. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set a line's quantity exactly; zero removes the line.
    /// Returns whether the line exists (or existed).
    pub(crate) fn set_quantity(&mut self, product_id: &ProductId, quantity: u64) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        match self.items.iter_mut().find(|i| &i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
