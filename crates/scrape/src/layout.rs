// ABOUTME: Class markers and selectors describing the leaderboard page layout.
// ABOUTME: Every dependency on the page's presentational markup lives here.

//! Page layout knowledge.
//!
//! The leaderboard exposes no semantic hooks, so cards and rows are found
//! through incidental utility class names. When the page layout changes,
//! this module is the one to update.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

/// Substring of the class attribute marking a card container.
pub const CARD_CLASS_MARKER: &str = "p-6";

/// How many ancestors above a heading are searched for the card marker.
pub const CARD_SEARCH_DEPTH: usize = 6;

/// Maximum number of entries kept per section.
pub const MAX_ENTRIES: usize = 5;

pub static HEADINGS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

/// Ranked rows inside a card.
pub static ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[class*="justify-between"]"#).unwrap());

/// Wrapper holding the rank and name of a row. Provider rows nest two of these.
pub static NAME_WRAPPER: Lazy<Selector> = Lazy::new(|| Selector::parse("div.min-w-0").unwrap());

pub static NAME_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
pub static NAME_LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

/// Numeric value cell of a row.
pub static VALUE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"span[class*="tabular-nums"]"#).unwrap());

/// Collapses runs of whitespace into single spaces and trims.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-normalized text content of an element.
pub fn element_text(el: &ElementRef) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// True if the element's raw class attribute contains `marker` as a substring.
pub fn class_contains(el: &ElementRef, marker: &str) -> bool {
    el.value()
        .attr("class")
        .map(|c| c.contains(marker))
        .unwrap_or(false)
}
