//! List the catalog.

use anyhow::{bail, Result};
use topshop_commerce::prelude::Category;
use topshop_data::CatalogLoad;

use super::ShopArgs;
use crate::context::Context;
use crate::pages::shop;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let category = args.category.as_deref().map(Category::from_label);

    let products = match load(ctx, category.as_ref()).await? {
        CatalogLoad::Failed(reason) => bail!("{}", shop::render_error(&reason)),
        settled => settled.products().map(|p| p.to_vec()).unwrap_or_default(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.page(&shop::render(&products));
    Ok(())
}

/// Fetch the catalog behind a spinner. Fetch failures settle as
/// `CatalogLoad::Failed`; only setting up the client is an `Err`.
pub async fn load(ctx: &Context, category: Option<&Category>) -> Result<CatalogLoad> {
    let catalog = ctx.catalog()?;
    if let Some(category) = category {
        ctx.output.debug(&format!("Filtering by category: {}", category));
    }

    let spinner = ctx.output.spinner(shop::LOADING_MESSAGE);
    let result = match category {
        Some(category) => catalog.fetch_category(category).await,
        None => catalog.fetch_products().await,
    };
    spinner.finish_and_clear();

    Ok(CatalogLoad::from_result(result))
}
