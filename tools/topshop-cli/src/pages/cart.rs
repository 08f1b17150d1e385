//! Cart page and the actions it offers.

use console::style;
use topshop_commerce::prelude::*;

use super::badge;

/// Something the user can do from the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
    Clear,
    Checkout,
}

/// Render the cart.
pub fn render(cart: &CartState) -> String {
    if cart.is_empty() {
        return format!(
            "\n{}\n{}\nRun the Shop menu to start shopping.\n",
            style("Your Cart is Empty").bold(),
            "Looks like you haven't added any products to your cart yet.",
        );
    }

    let mut out = format!("\n{}\n\n", style("Shopping Cart").bold().underlined());

    for item in cart.items() {
        let decrease = if item.quantity <= 1 {
            style("[-]").dim()
        } else {
            style("[-]")
        };
        out.push_str(&format!(
            "  {} {}\n    {}\n    Quantity: {} {} [+]\n    {}  {}\n\n",
            style(&item.product.title).bold(),
            badge(&item.product.category),
            style(&item.product.description).dim(),
            decrease,
            style(item.quantity).bold(),
            style(item.subtotal()).blue().bold(),
            style(format!("{} each", item.unit_price())).dim(),
        ));
    }

    out.push_str(&format!(
        "  {}    {}\n",
        style(format!("Total Items: {}", cart.item_count())).bold(),
        style(format!("Total: {}", cart.total())).blue().bold(),
    ));
    out
}

/// Actions available for the current cart, labelled for a menu.
///
/// Decrease is only offered above quantity 1; going lower is done with Remove.
pub fn actions(cart: &CartState) -> Vec<(String, CartAction)> {
    let mut actions = Vec::new();
    if cart.is_empty() {
        return actions;
    }

    for item in cart.items() {
        let title = &item.product.title;
        actions.push((format!("+ {}", title), CartAction::Increase(item.id())));
        if item.quantity > 1 {
            actions.push((format!("- {}", title), CartAction::Decrease(item.id())));
        }
        actions.push((format!("Remove {}", title), CartAction::Remove(item.id())));
    }
    actions.push(("Clear Cart".to_string(), CartAction::Clear));
    actions.push(("Proceed to Checkout".to_string(), CartAction::Checkout));
    actions
}

/// Apply a cart action to the store. Returns false for checkout, which does
/// not touch the cart.
pub fn apply(store: &mut CartStore, action: CartAction) -> bool {
    match action {
        CartAction::Increase(id) | CartAction::Decrease(id) => {
            let Some(current) = store.get_item(&id).map(|item| item.quantity) else {
                return true;
            };
            let delta = if matches!(action, CartAction::Increase(_)) { 1 } else { -1 };
            let current = i64::try_from(current).unwrap_or(i64::MAX);
            store.update_quantity(&id, current.saturating_add(delta));
        }
        CartAction::Remove(id) => store.remove_from_cart(&id),
        CartAction::Clear => store.clear_cart(),
        CartAction::Checkout => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn product(id: u64, title: &str, cents: i64) -> Product {
        Product::new(ProductId::new(id), title, Money::new(cents, Currency::USD))
            .with_category(Category::Electronics)
    }

    fn plain(cart: &CartState) -> String {
        strip_ansi_codes(&render(cart)).to_string()
    }

    #[test]
    fn test_empty_cart() {
        let page = plain(&CartState::new());
        assert!(page.contains("Your Cart is Empty"));
        assert!(!page.contains("Total:"));
        assert!(actions(&CartState::new()).is_empty());
    }

    #[test]
    fn test_line_items_and_totals() {
        let mut store = CartStore::new();
        store.add_quantity(product(1, "Test Product 1", 1099), 2);
        store.add_to_cart(product(2, "Test Product 2", 2099));

        let page = plain(store.state());
        assert!(page.contains("Shopping Cart"));
        assert!(page.contains("Test Product 1"));
        assert!(page.contains("Quantity: [-] 2 [+]"));
        assert!(page.contains("$21.98"));
        assert!(page.contains("$10.99 each"));
        assert!(page.contains("Total Items: 3"));
        assert!(page.contains("Total: $42.97"));
    }

    #[test]
    fn test_decrease_hidden_at_quantity_one() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "Mug", 800));

        let labels: Vec<CartAction> = actions(store.state()).into_iter().map(|(_, a)| a).collect();
        assert_eq!(
            labels,
            vec![
                CartAction::Increase(ProductId::new(1)),
                CartAction::Remove(ProductId::new(1)),
                CartAction::Clear,
                CartAction::Checkout,
            ]
        );

        store.add_to_cart(product(1, "Mug", 800));
        assert!(actions(store.state())
            .iter()
            .any(|(label, a)| *a == CartAction::Decrease(ProductId::new(1)) && label == "- Mug"));
    }

    #[test]
    fn test_apply_actions() {
        let id = ProductId::new(1);
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "Mug", 800));

        assert!(apply(&mut store, CartAction::Increase(id)));
        assert_eq!(store.cart_count(), 2);

        assert!(apply(&mut store, CartAction::Decrease(id)));
        assert_eq!(store.cart_count(), 1);

        assert!(apply(&mut store, CartAction::Decrease(id)));
        assert!(store.is_empty());

        store.add_to_cart(product(2, "Lamp", 1500));
        assert!(apply(&mut store, CartAction::Remove(ProductId::new(2))));
        assert!(store.is_empty());

        store.add_to_cart(product(3, "Pen", 100));
        assert!(!apply(&mut store, CartAction::Checkout));
        assert_eq!(store.cart_count(), 1);
        assert!(apply(&mut store, CartAction::Clear));
        assert_eq!(store.cart_total().display(), "$0.00");
    }

    #[test]
    fn test_actions_on_missing_item_are_ignored() {
        let mut store = CartStore::new();
        assert!(apply(&mut store, CartAction::Increase(ProductId::new(42))));
        assert!(store.is_empty());
    }
}
