//! Commerce error types.

use thiserror::Error;

/// Errors raised while bringing catalog data into the domain model.
///
/// The cart itself never fails; these only come from the catalog boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Price is negative, NaN or infinite.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: u64, price: f64 },

    /// Product title is missing or blank.
    #[error("Product {0} has no title")]
    MissingTitle(u64),
}
