//! Product catalog module.
//!
//! Contains the product record served by the catalog API and its validated
//! domain form.

mod category;
mod product;

pub use category::{BadgeColor, Category};
pub use product::{Product, ProductRecord, Rating, RatingRecord, MAX_RATING};
