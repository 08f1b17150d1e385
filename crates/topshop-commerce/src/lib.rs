//! Catalog and shopping cart domain types for TOP Shopping.
//!
//! This crate provides the storefront's domain model:
//!
//! - **Catalog**: Products as served by the catalog API, categories, ratings
//! - **Cart**: Line items, cart state, and the `CartStore` that owns it
//! - **Money**: Integer-cents amounts with two-decimal display
//!
//! # Example
//!
//! ```rust
//! use topshop_commerce::prelude::*;
//!
//! let mut store = CartStore::new();
//! let product = Product::new(ProductId::new(1), "Backpack", Money::from_decimal(10.0, Currency::USD));
//!
//! store.add_to_cart(product.clone());
//! store.add_to_cart(product);
//!
//! assert_eq!(store.cart_count(), 2);
//! assert_eq!(store.cart_total().display(), "$20.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{BadgeColor, Category, Product, ProductRecord, Rating};

    // Cart
    pub use crate::cart::{parse_quantity, CartState, CartStore, LineItem};
}
