//! Interactive shopping session.
//!
//! One `CartStore` lives for the whole session. The navigation badge reads a
//! count kept current by a store subscription.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use topshop_commerce::prelude::*;
use topshop_data::CatalogLoad;
use tracing::info;

use super::shop::load;
use crate::context::Context;
use crate::pages::{self, cart, home, shop};

const MENU: [&str; 4] = ["Home", "Shop", "Cart", "Quit"];

/// Run the session command.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive session cannot run with --json");
    }

    let theme = ColorfulTheme::default();
    let mut store = CartStore::new();
    let badge = Rc::new(Cell::new(0u64));
    let sink = Rc::clone(&badge);
    store.subscribe(move |cart| sink.set(cart.item_count()));

    let mut products: Option<Vec<Product>> = None;

    ctx.output.header(&ctx.config.session.greeting);
    info!("session started");

    loop {
        ctx.output.page(&format!("\n{}", pages::nav_bar(badge.get())));
        let choice = Select::with_theme(&theme)
            .with_prompt("Where to?")
            .items(&MENU)
            .default(1)
            .interact()?;

        match MENU[choice] {
            "Home" => ctx.output.page(&home::render(&ctx.config.session.greeting)),
            "Shop" => {
                if products.is_none() {
                    match load(ctx, None).await? {
                        CatalogLoad::Loaded(loaded) => products = Some(loaded),
                        CatalogLoad::Failed(reason) => {
                            ctx.output.error(&shop::render_error(&reason));
                            continue;
                        }
                        CatalogLoad::Loading => continue,
                    }
                }
                if let Some(products) = &products {
                    shop_page(ctx, &theme, &mut store, products)?;
                }
            }
            "Cart" => cart_page(ctx, &theme, &mut store)?,
            _ => break,
        }
    }

    info!(items = store.cart_count(), "session ended");
    ctx.output.success(&format!(
        "Goodbye! {} item(s) left in your cart.",
        store.cart_count()
    ));
    Ok(())
}

fn shop_page(
    ctx: &Context,
    theme: &ColorfulTheme,
    store: &mut CartStore,
    products: &[Product],
) -> Result<()> {
    ctx.output.page(&shop::render(products));

    let mut items: Vec<String> = products
        .iter()
        .map(|p| format!("{} ({})", p.title, p.price))
        .collect();
    items.push("Back".to_string());

    loop {
        let selection = Select::with_theme(theme)
            .with_prompt(format!("Add to cart ({} in cart)", store.cart_count()))
            .items(&items)
            .default(0)
            .interact()?;
        let Some(product) = products.get(selection) else {
            return Ok(());
        };

        let raw: String = Input::with_theme(theme)
            .with_prompt("Quantity")
            .default("1".to_string())
            .interact_text()?;
        let quantity = parse_quantity(&raw);

        store.add_quantity(product.clone(), quantity);
        ctx.output
            .success(&format!("Added {} x {} to your cart", quantity, product.title));
    }
}

fn cart_page(ctx: &Context, theme: &ColorfulTheme, store: &mut CartStore) -> Result<()> {
    loop {
        ctx.output.page(&cart::render(store.state()));

        let actions = cart::actions(store.state());
        if actions.is_empty() {
            return Ok(());
        }

        let mut labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();
        labels.push("Continue Shopping");

        let selection = Select::with_theme(theme)
            .with_prompt("Cart")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;
        let Some((_, action)) = actions.get(selection) else {
            return Ok(());
        };

        if !cart::apply(store, *action) {
            ctx.output.info("Checkout is not available yet.");
        }
    }
}
