//! Shop contact card.

use anyhow::{Context as _, Result};

use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub async fn run(_args: ShopArgs, ctx: &Context) -> Result<()> {
    let info = ctx
        .client
        .shop_info()
        .await
        .context("Failed to load shop info")?;

    let Some(info) = info else {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::Value::Null);
        } else {
            ctx.output.warn("Shop info has not been set up yet.");
        }
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&info);
        return Ok(());
    }

    ctx.output.header("Visit Us");
    ctx.output.kv("address", &info.address);
    ctx.output.kv("phone", &info.phone);
    ctx.output.kv("email", &info.email);
    ctx.output.kv("hours", &info.hours);

    let links = info.social_links();
    if !links.is_empty() {
        println!();
        for (network, url) in links {
            ctx.output.list_item(&format!("{}: {}", network, url));
        }
    }

    Ok(())
}
