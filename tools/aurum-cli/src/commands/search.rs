//! Interactive search.
//!
//! Each line read from stdin replaces the search box contents. The query is
//! applied once input has been quiet for the debounce window, so a burst of
//! lines (e.g. piped input) renders a single result set.
//!
//! Lines starting with `:` are commands:
//!
//! - `:category <slug>` switch category (`all` for every category)
//! - `:facet <facet>=<Label>` toggle a facet selection
//! - `:clear` clear the search box
//! - `:reset` reset price and facet filters
//! - `:quit` exit

use std::time::Instant;

use anyhow::{bail, Context as _, Result};
use aurum_catalog::prelude::*;
use aurum_query::ProductFeed;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::browse::render_view;
use super::SearchArgs;
use crate::context::Context;

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Category(CategorySelection),
    Facet(Facet, String),
    Clear,
    Reset,
    Quit,
}

fn parse_input(line: &str) -> Result<Input> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Input::Query(line.to_string()));
    };

    let (name, rest) = command
        .trim()
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command.trim(), ""));

    match (name, rest) {
        ("category" | "cat", slug) if !slug.is_empty() => {
            Ok(Input::Category(CategorySelection::from_slug(slug)))
        }
        ("facet", selection) if !selection.is_empty() => {
            let (facet, label) = selection
                .split_once('=')
                .context("Expected :facet <facet>=<Label>")?;
            Ok(Input::Facet(facet.trim().parse()?, label.trim().to_string()))
        }
        ("clear", _) => Ok(Input::Clear),
        ("reset", _) => Ok(Input::Reset),
        ("quit" | "q", _) => Ok(Input::Quit),
        _ => bail!("Unknown command: {}", line),
    }
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let window = args
        .debounce_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| ctx.config.search_debounce());
    let mut session = CatalogSession::with_debounce(window).with_state(args.filters.to_state("")?);

    let mut feed = ProductFeed::new(ctx.client.clone());
    feed.select(&session.state().selected_category);
    let mut products = feed.load().await.context("Failed to load products")?;

    ctx.output.info("Type to search. :category <slug>, :facet <f>=<Label>, :clear, :reset, :quit");
    render_view(ctx, &session.view(Some(&products), false));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = session.search_deadline();
        let wake = tokio::time::Instant::from_std(deadline.unwrap_or_else(Instant::now));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                let input = match parse_input(&line) {
                    Ok(input) => input,
                    Err(e) => {
                        ctx.output.warn(&format!("{:#}", e));
                        continue;
                    }
                };

                match input {
                    Input::Query(text) => session.type_query(text, Instant::now()),
                    Input::Category(selection) => {
                        if session.select_category(selection) && feed.select(&session.state().selected_category) {
                            products = feed.load().await.context("Failed to load products")?;
                        }
                        render_view(ctx, &session.view(Some(&products), false));
                    }
                    Input::Facet(facet, label) => {
                        let checked = !session.state().facet_filters.is_selected(facet, &label);
                        session.toggle_facet(facet, &label, checked);
                        render_view(ctx, &session.view(Some(&products), false));
                    }
                    Input::Clear => {
                        session.clear_search();
                        render_view(ctx, &session.view(Some(&products), false));
                    }
                    Input::Reset => {
                        session.reset_filters();
                        render_view(ctx, &session.view(Some(&products), false));
                    }
                    Input::Quit => return Ok(()),
                }
            }
            _ = tokio::time::sleep_until(wake), if deadline.is_some() => {
                if session.tick(Instant::now()) {
                    render_view(ctx, &session.view(Some(&products), false));
                }
            }
        }
    }

    // Flush whatever was typed last.
    if let Some(deadline) = session.search_deadline() {
        if session.tick(deadline) {
            render_view(ctx, &session.view(Some(&products), false));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_queries() {
        assert_eq!(parse_input("gold ring").unwrap(), Input::Query("gold ring".into()));
        assert_eq!(parse_input("").unwrap(), Input::Query(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse_input(":category rings").unwrap(),
            Input::Category(CategorySelection::from_slug("rings"))
        );
        assert_eq!(parse_input(":cat all").unwrap(), Input::Category(CategorySelection::All));
        assert_eq!(
            parse_input(":facet stone=Diamond").unwrap(),
            Input::Facet(Facet::Stone, "Diamond".into())
        );
        assert_eq!(parse_input(":clear").unwrap(), Input::Clear);
        assert_eq!(parse_input(" :reset").unwrap(), Input::Query(" :reset".into()));
        assert_eq!(parse_input(":q").unwrap(), Input::Quit);
    }

    #[test]
    fn test_bad_commands() {
        assert!(parse_input(":category").is_err());
        assert!(parse_input(":facet colour=Red").is_err());
        assert!(parse_input(":dance").is_err());
    }
}
