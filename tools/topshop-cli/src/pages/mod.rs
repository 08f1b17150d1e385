//! Text renderings of the storefront pages.
//!
//! Every page renders to a `String` so commands decide where it goes and tests
//! can inspect it after stripping styling.

pub mod cart;
pub mod home;
pub mod shop;

use console::style;
use topshop_commerce::prelude::{BadgeColor, Category, Rating};

/// Navigation bar with the live cart count.
pub fn nav_bar(cart_count: u64) -> String {
    format!(
        "{}  {}  {}  {}",
        style("TOP Shopping").bold().cyan(),
        style("Home").cyan(),
        style("Shop").cyan(),
        style(format!("Cart ({})", cart_count)).cyan(),
    )
}

/// Category label coloured by its badge scheme.
pub fn badge(category: &Category) -> String {
    let label = format!("[{}]", category);
    let styled = style(label);
    match category.badge_color() {
        BadgeColor::Blue => styled.blue(),
        BadgeColor::Pink => styled.magenta(),
        BadgeColor::Purple => styled.color256(93),
        BadgeColor::Green => styled.green(),
        BadgeColor::Gray => styled.dim(),
    }
    .to_string()
}

/// One star per rounded rating point, followed by the review count.
pub fn stars(rating: &Rating) -> String {
    format!(
        "{} ({})",
        style("★".repeat(rating.stars() as usize)).yellow(),
        rating.count
    )
}
