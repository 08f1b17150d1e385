//! Show the landing page.

use anyhow::Result;

use crate::context::Context;
use crate::pages::home;

/// Run the home command.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&home::featured_products());
        return Ok(());
    }

    ctx.output.page(&home::render(&ctx.config.session.greeting));
    Ok(())
}
