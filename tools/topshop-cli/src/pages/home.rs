//! Landing page.

use console::style;
use topshop_commerce::prelude::*;

use super::{badge, stars};

const FEATURES: [(&str, &str); 4] = [
    ("Easy Shopping", "Simple and intuitive shopping experience"),
    ("Fast Delivery", "Quick and reliable shipping worldwide"),
    ("Secure Payment", "Safe and encrypted payment methods"),
    ("24/7 Support", "Round the clock customer service"),
];

/// The hand-picked products shown on the landing page.
pub fn featured_products() -> Vec<Product> {
    let usd = |amount| Money::from_decimal(amount, Currency::USD);
    vec![
        Product::new(ProductId::new(9001), "Wireless Headphones", usd(199.99))
            .with_category(Category::from_label("Electronics"))
            .with_description("Premium quality wireless headphones with noise cancellation")
            .with_rating(Rating::new(5.0, 0)),
        Product::new(ProductId::new(9002), "Smart Watch", usd(299.99))
            .with_category(Category::from_label("Wearables"))
            .with_description("Feature-rich smartwatch with health monitoring")
            .with_rating(Rating::new(5.0, 0)),
        Product::new(ProductId::new(9003), "Running Shoes", usd(129.99))
            .with_category(Category::from_label("Sports"))
            .with_description("Comfortable and durable running shoes for athletes")
            .with_rating(Rating::new(5.0, 0)),
    ]
}

/// Render the landing page.
pub fn render(greeting: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style(greeting).bold().underlined()));
    out.push_str(
        "Discover amazing products at unbeatable prices. Shop the latest trends\n\
         with confidence and enjoy fast, secure shopping experience.\n",
    );

    out.push_str(&format!("\n{}\n", style("Why Choose TOP Shopping?").bold()));
    for (title, blurb) in FEATURES {
        out.push_str(&format!("  {} {}\n", style(title).bold(), style(blurb).dim()));
    }

    out.push_str(&format!("\n{}\n", style("Featured Products").bold()));
    for product in featured_products() {
        out.push_str(&format!(
            "  {} {}\n    {}\n    {}\n    {}\n",
            badge(&product.category),
            style(&product.title).bold(),
            stars(&product.rating),
            product.description,
            style(product.price).blue().bold(),
        ));
    }

    out.push_str(&format!("\n{}\n", style("Ready to Start Shopping?").bold()));
    out.push_str(
        "Join thousands of satisfied customers who trust TOP Shopping for their\n\
         online shopping needs. Run `topshop shop` to browse all products.\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_home_sections() {
        let page = strip_ansi_codes(&render("Welcome to TOP Shopping")).to_string();
        assert!(page.contains("Welcome to TOP Shopping"));
        assert!(page.contains("Why Choose TOP Shopping?"));
        for (title, _) in FEATURES {
            assert!(page.contains(title));
        }
        assert!(page.contains("Featured Products"));
        assert!(page.contains("Ready to Start Shopping?"));
    }

    #[test]
    fn test_three_featured_products() {
        let featured = featured_products();
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].category, Category::Electronics);
        assert_eq!(featured[2].price.display(), "$129.99");

        let page = strip_ansi_codes(&render("Hi")).to_string();
        assert!(page.contains("Smart Watch"));
        assert!(page.contains("$299.99"));
    }
}
