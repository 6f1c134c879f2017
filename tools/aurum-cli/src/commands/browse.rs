//! Catalog page: one category, filtered.

use anyhow::{Context as _, Result};
use aurum_catalog::prelude::*;
use aurum_query::ProductFeed;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{price_cell, product_badge, stock_cell};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let state = args.filters.to_state(&args.query)?;
    let session = CatalogSession::with_debounce(ctx.config.search_debounce()).with_state(state);

    let mut feed = ProductFeed::new(ctx.client.clone());
    feed.select(&session.state().selected_category);
    ctx.output.debug(&format!("Loading {}", feed.key()));

    let spinner = ctx.output.spinner("Loading products...");
    let products = feed.load().await;
    spinner.finish_and_clear();
    let products = products.context("Failed to load products")?;

    render_view(ctx, &session.view(Some(&products), false));
    Ok(())
}

/// Print a catalog view: title, summary, one row per product.
pub fn render_view(ctx: &Context, view: &CatalogView<'_>) {
    if ctx.output.is_json() {
        ctx.output.json(view);
        return;
    }

    ctx.output.header(view.title);
    ctx.output.info(&view.summary);

    if let Some(message) = view.empty_message {
        ctx.output.info(message);
        return;
    }

    println!();
    let widths = [28, 30, 8, 12];
    ctx.output.table_row(&["NAME", "PRICE", "BADGE", "STOCK"], &widths);
    ctx.output.table_row(&["----", "-----", "-----", "-----"], &widths);
    for product in &view.products {
        ctx.output.table_row(
            &[
                &product.name,
                &price_cell(product),
                &product_badge(product.badge()),
                &stock_cell(product),
            ],
            &widths,
        );
    }

    if view.show_load_more {
        println!();
        ctx.output.info("Load More Products");
    }
}
