//! # Command Line Front End
//!
//! Parses arguments into a [`Command`] and renders a [`PageDto`] as a
//! plain-text table.
//!
//! ## Usage
//! ```bash
//! stockroom list --page 2 --search widget
//! stockroom add "Blue Widget" 9.99 5
//! stockroom edit 1001 "Blue Widget" 10.49 4
//! stockroom delete 1001
//! ```

use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;

use crate::commands::product::PageDto;
use crate::state::ConfigState;
use stockroom_core::{Money, ProductId};

#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(about = "Local product inventory manager")]
pub struct Cli {
    /// Database file (overrides STOCKROOM_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show one page of products
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a product
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Replace the fields of a product
    Edit {
        #[arg(allow_hyphen_values = true)]
        id: ProductId,
        name: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Delete a product
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: ProductId,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            page: 1,
            search: None,
        }
    }
}

const NAME_WIDTH: usize = 40;

/// Renders the page as a table with a page indicator underneath.
pub fn render_table(page: &PageDto, config: &ConfigState) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "{:>6}  {:<w$}  {:>12}  {:>8}",
        "ID",
        "NAME",
        "PRICE",
        "QTY",
        w = NAME_WIDTH
    );
    let _ = writeln!(out, "{}", "-".repeat(6 + 2 + NAME_WIDTH + 2 + 12 + 2 + 8));

    if page.products.is_empty() {
        let _ = writeln!(out, "(no products)");
    }

    for product in &page.products {
        let _ = writeln!(
            out,
            "{:>6}  {:<w$}  {:>12}  {:>8}",
            product.id,
            truncate(&product.name, NAME_WIDTH),
            config.format_price(Money::from_cents(product.price_cents)),
            product.quantity,
            w = NAME_WIDTH
        );
    }

    let _ = writeln!(out);
    if !page.search_query.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", page.search_query);
    }
    if page.show_controls {
        let _ = write!(
            out,
            "Page {} of {} ({} products)",
            page.current_page, page.page_count, page.total_items
        );
    } else {
        let _ = write!(out, "{} products", page.total_items);
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::ProductDto;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stockroom").chain(args.iter().copied())).unwrap()
    }

    fn dto(id: i64, name: &str, cents: i64, qty: i64) -> ProductDto {
        ProductDto {
            id,
            name: name.to_string(),
            price: Money::from_cents(cents).to_string(),
            price_cents: cents,
            quantity: qty,
        }
    }

    fn page(products: Vec<ProductDto>, current: usize, count: usize, total: usize) -> PageDto {
        PageDto {
            products,
            current_page: current,
            page_count: count,
            page_size: 10,
            total_items: total,
            search_query: String::new(),
            show_controls: count > 1,
            has_previous: current > 1,
            has_next: current < count,
        }
    }

    #[test]
    fn test_no_subcommand_lists_first_page() {
        let cli = parse(&[]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_list() {
        let cli = parse(&["list", "--page", "3", "--search", "widget", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::List {
                page: 3,
                search: Some("widget".to_string())
            })
        );
        assert!(cli.json);
    }

    #[test]
    fn test_parse_add_keeps_raw_text() {
        let cli = parse(&["add", "Blue Widget", "9.99", "-5"]);
        assert_eq!(
            cli.command,
            Some(Command::Add {
                name: "Blue Widget".to_string(),
                price: "9.99".to_string(),
                quantity: "-5".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_edit_and_delete() {
        let cli = parse(&["--db", "/tmp/s.db", "edit", "7", "Gadget", "1", "2"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/s.db")));
        assert!(matches!(cli.command, Some(Command::Edit { id: 7, .. })));

        let cli = parse(&["delete", "12"]);
        assert_eq!(cli.command, Some(Command::Delete { id: 12 }));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["stockroom", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_render_table_with_pager() {
        let rendered = render_table(
            &page(vec![dto(12, "Widget", 999, 5)], 2, 3, 25),
            &ConfigState::default(),
        );

        assert!(rendered.contains("Widget"));
        assert!(rendered.contains("$9.99"));
        assert!(rendered.ends_with("Page 2 of 3 (25 products)"));
    }

    #[test]
    fn test_render_table_single_page_has_no_pager() {
        let rendered = render_table(&page(Vec::new(), 1, 0, 0), &ConfigState::default());

        assert!(rendered.contains("(no products)"));
        assert!(rendered.ends_with("0 products"));
        assert!(!rendered.contains("Page"));
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
