//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::CliConfig;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => config_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("api_url", &ctx.config.api_url);
    ctx.output.kv("timeout_secs", &ctx.config.timeout_secs.to_string());
    ctx.output
        .kv("search_debounce_ms", &ctx.config.search_debounce_ms.to_string());
    ctx.output.kv("source", &ctx.source.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    CliConfig::default().save(&config_path)?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn config_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) if ctx.output.is_json() => ctx.output.json(&path.display().to_string()),
        Some(path) => println!("{}", path.display()),
        None => ctx
            .output
            .info("No config file found. Run `aurum config init` to create one."),
    }

    Ok(())
}
