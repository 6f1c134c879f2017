//! Aurum CLI - browse the jewelry catalog from a terminal.
//!
//! Commands:
//! - `aurum browse` - List products for a category with filters applied
//! - `aurum search` - Interactive search with debounced input
//! - `aurum categories` - List the category navigation
//! - `aurum carousel` - Show the active hero slides
//! - `aurum shop` - Show the shop contact card
//! - `aurum config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CarouselArgs, CategoriesArgs, ConfigArgs, SearchArgs, ShopArgs};

/// Aurum CLI - Browse the Aurum jewelry catalog
#[derive(Parser)]
#[command(name = "aurum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Read the catalog from a JSON seed file instead of the API
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products for a category
    Browse(BrowseArgs),

    /// Search interactively, one query per line
    Search(SearchArgs),

    /// List categories
    Categories(CategoriesArgs),

    /// Show the hero carousel
    Carousel(CarouselArgs),

    /// Show shop contact details
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("aurum_query=debug,aurum_db=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.seed, output.clone()).await {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Carousel(args) => commands::carousel::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
