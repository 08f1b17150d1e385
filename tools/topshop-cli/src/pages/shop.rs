//! Catalog listing.

use console::style;
use topshop_commerce::prelude::Product;

use super::{badge, stars};

/// Shown while the catalog request is in flight.
pub const LOADING_MESSAGE: &str = "Loading products...";

/// One product card.
pub fn render_product(index: usize, product: &Product) -> String {
    format!(
        "{:>3}. {} {}\n     {}\n     {}\n     {}\n",
        index + 1,
        badge(&product.category),
        style(&product.title).bold(),
        stars(&product.rating),
        style(&product.description).dim(),
        style(product.price).blue().bold(),
    )
}

/// The full listing, numbered from 1.
pub fn render(products: &[Product]) -> String {
    let mut out = format!(
        "\n{}\n{}\n\n",
        style("Shop Our Products").bold().underlined(),
        "Discover amazing products from our curated collection. Start adding them to your cart!"
    );

    if products.is_empty() {
        out.push_str("No products found.\n");
        return out;
    }

    for (index, product) in products.iter().enumerate() {
        out.push_str(&render_product(index, product));
        out.push('\n');
    }
    out
}

/// Message shown when the catalog could not be loaded.
pub fn render_error(reason: &str) -> String {
    format!("Error loading products: {}", reason)
}
