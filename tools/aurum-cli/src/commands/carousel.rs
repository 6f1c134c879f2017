//! Hero carousel slides.

use anyhow::{Context as _, Result};

use super::CarouselArgs;
use crate::context::Context;

/// Run the carousel command.
pub async fn run(_args: CarouselArgs, ctx: &Context) -> Result<()> {
    let slides = ctx
        .client
        .carousel()
        .await
        .context("Failed to load carousel")?;

    if ctx.output.is_json() {
        ctx.output.json(&slides);
        return Ok(());
    }

    ctx.output.header("Carousel");
    if slides.is_empty() {
        ctx.output.info("No active slides.");
        return Ok(());
    }

    for (i, slide) in slides.iter().enumerate() {
        ctx.output.info(&format!("{}. {}", i + 1, slide.title));
        if let Some(subtitle) = &slide.subtitle {
            ctx.output.kv("subtitle", subtitle);
        }
        ctx.output.kv("image", &slide.image_url);
        if let (Some(text), Some(link)) = (&slide.button_text, &slide.button_link) {
            ctx.output.kv(text, link);
        }
    }

    Ok(())
}
