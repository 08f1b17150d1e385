//! Shopping cart module.
//!
//! Contains the cart state, line items, the store that owns the state, and
//! quantity input handling.

mod cart;
mod quantity;
mod store;

pub use cart::{CartState, LineItem};
pub use quantity::parse_quantity;
pub use store::CartStore;
