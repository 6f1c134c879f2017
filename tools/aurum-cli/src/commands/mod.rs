//! CLI command implementations.

pub mod browse;
pub mod carousel;
pub mod categories;
pub mod config;
pub mod search;
pub mod shop;

use aurum_catalog::prelude::*;
use clap::{Args, Subcommand};

/// Filters shared by `browse` and `search`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Category slug, or `all`.
    #[arg(long, default_value = "all")]
    pub category: CategorySelection,

    /// Lowest price, inclusive.
    #[arg(long, default_value_t = 0)]
    pub min: u64,

    /// Highest price, inclusive.
    #[arg(long, default_value_t = MAX_PRICE)]
    pub max: u64,

    /// Facet selection as `facet=Label`, e.g. `stone=Diamond`. Repeatable.
    #[arg(short, long = "facet", value_parser = parse_facet)]
    pub facets: Vec<(Facet, String)>,
}

impl FilterArgs {
    /// Filter state for these flags, with the given search query.
    pub fn to_state(&self, query: &str) -> Result<FilterState, CatalogError> {
        let state = self.facets.iter().fold(
            FilterState::new()
                .with_category(self.category.clone())
                .with_query(query)
                .with_price_range(PriceRange::checked(self.min, self.max)?),
            |state, (facet, label)| state.with_facet(*facet, label.clone()),
        );
        Ok(state)
    }
}

fn parse_facet(s: &str) -> Result<(Facet, String), String> {
    let (facet, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected facet=Label, got '{}'", s))?;
    let facet: Facet = facet.trim().parse().map_err(|e: CatalogError| e.to_string())?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label for facet '{}'", facet));
    }
    Ok((facet, label.to_string()))
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Search text matched against name, description and category.
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Quiet period in milliseconds before typed text is applied
    /// (default: from config).
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Also list the slug of each category.
    #[arg(long)]
    pub slugs: bool,
}

/// Arguments for the carousel command.
#[derive(Args)]
pub struct CarouselArgs {}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Create a config file in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },

    /// Print the path of the config file in use.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facet() {
        assert_eq!(
            parse_facet("stone=Diamond").unwrap(),
            (Facet::Stone, "Diamond".to_string())
        );
        assert_eq!(
            parse_facet("Purity = 22K").unwrap(),
            (Facet::Purity, "22K".to_string())
        );
        assert!(parse_facet("stone").is_err());
        assert!(parse_facet("colour=Red").is_err());
        assert!(parse_facet("stone=").is_err());
    }

    #[test]
    fn test_filter_args_build_state() {
        let args = FilterArgs {
            category: CategorySelection::from_slug("rings"),
            min: 1000,
            max: 50000,
            facets: vec![(Facet::Stone, "Diamond".to_string())],
        };
        let state = args.to_state("solitaire").unwrap();
        assert_eq!(state.selected_category, CategorySelection::from_slug("rings"));
        assert_eq!(state.price_range, PriceRange::new(1000, 50000));
        assert_eq!(state.search_query, "solitaire");
        assert!(state.facet_filters.is_selected(Facet::Stone, "Diamond"));
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let args = FilterArgs {
            category: CategorySelection::All,
            min: 10,
            max: 5,
            facets: Vec::new(),
        };
        assert!(args.to_state("").is_err());
    }
}
