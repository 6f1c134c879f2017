//! Category navigation.

use anyhow::{Context as _, Result};
use aurum_catalog::prelude::*;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let categories = ctx
        .client
        .categories()
        .await
        .context("Failed to load categories")?;
    let options = category_options(&categories);

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Categories");
    for option in &options {
        if args.slugs {
            ctx.output.list_item(&format!("{} ({})", option.name, option.slug));
        } else {
            ctx.output.list_item(&option.name);
        }
    }

    Ok(())
}
