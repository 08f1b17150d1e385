//! The cart store: sole owner and writer of the session's cart.

use crate::cart::{CartState, LineItem};
use crate::catalog::Product;
use crate::ids::{ProductId, SubscriptionId};
use crate::money::Money;
use tracing::debug;

type Subscriber = Box<dyn FnMut(&CartState)>;

/// Holds the cart for one session and notifies subscribers on every change.
///
/// A store is created empty when a session starts and passed by reference to
/// whatever reads or edits the cart. Every mutating operation is total: it
/// never fails, and it always notifies subscribers afterwards, even when the
/// call turned out to be a no-op.
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use topshop_commerce::prelude::*;
///
/// let mut store = CartStore::new();
/// let badge = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&badge);
/// store.subscribe(move |cart| sink.set(cart.item_count()));
///
/// store.add_to_cart(Product::new(ProductId::new(1), "Mug", Money::new(800, Currency::USD)));
/// assert_eq!(badge.get(), 1);
/// ```
pub struct CartStore {
    state: CartState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    version: u64,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            version: 0,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same product has its quantity incremented;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add_to_cart(&mut self, product: Product) {
        debug!(product_id = %product.id, "add to cart");
        self.state.add(product, 1);
        self.notify();
    }

    /// Add a product `quantity` times with a single notification.
    ///
    /// A quantity of 0 is treated as 1.
    pub fn add_quantity(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        debug!(product_id = %product.id, quantity, "add quantity to cart");
        self.state.add(product, u64::from(quantity));
        self.notify();
    }

    /// Remove a product's line. Absent products are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        let removed = self.state.remove(product_id);
        debug!(%product_id, removed, "remove from cart");
        self.notify();
    }

    /// Set a product's quantity exactly.
    ///
    /// A quantity of zero or less removes the line, like `remove_from_cart`.
    /// Absent products are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        let quantity = u64::try_from(quantity).unwrap_or(0);
        let found = self.state.set_quantity(product_id, quantity);
        debug!(%product_id, quantity, found, "update quantity");
        self.notify();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        debug!(lines = self.state.unique_item_count(), "clear cart");
        self.state.clear();
        self.notify();
    }

    /// Sum of quantities across all lines.
    pub fn cart_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Sum of unit price times quantity across all lines.
    pub fn cart_total(&self) -> Money {
        self.state.total()
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Line items in the order first added.
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Get a line by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.state.get_item(product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.state.unique_item_count()
    }

    /// Number of mutations applied so far. Lets readers poll for changes.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Register a callback invoked with the new state after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() < len_before
    }

    fn notify(&mut self) {
        self.version += 1;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.state);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("version", &self.version)
            .finish()
    }
}
