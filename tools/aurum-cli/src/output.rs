//! Output formatting for the CLI.

use aurum_catalog::prelude::*;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Card badge, colored the way the storefront shows it.
pub fn product_badge(badge: Option<ProductBadge>) -> String {
    match badge {
        Some(ProductBadge::Sale) => style(badge_text(ProductBadge::Sale)).red().bold().to_string(),
        Some(ProductBadge::New) => style(badge_text(ProductBadge::New)).yellow().bold().to_string(),
        None => String::new(),
    }
}

fn badge_text(badge: ProductBadge) -> String {
    format!("[{}]", badge.label())
}

/// Price column: current price, plus the struck original and discount when
/// on sale.
pub fn price_cell(product: &Product) -> String {
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(pct)) => format!(
            "{} {} {}",
            product.price,
            style(original).dim().strikethrough(),
            style(format!("-{}%", pct)).green()
        ),
        _ => product.price.to_string(),
    }
}

/// Stock label, dimmed when sold out.
pub fn stock_cell(product: &Product) -> String {
    if product.in_stock {
        product.stock_label().to_string()
    } else {
        style(product.stock_label()).dim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_price_cell() {
        console::set_colors_enabled(false);
        let product = Product::new("p1", "Gold Ring", 125000, "rings");
        assert_eq!(price_cell(&product), "₹1,25,000");
    }

    #[test]
    fn test_sale_price_cell() {
        console::set_colors_enabled(false);
        let mut product = Product::new("p1", "Gold Ring", 900, "rings");
        product.original_price = Some(Price::new(1000));
        assert_eq!(price_cell(&product), "₹900 ₹1,000 -10%");
        assert_eq!(product_badge(product.badge()), "[SALE]");
    }
}
