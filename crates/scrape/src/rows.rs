// ABOUTME: Row Extractor: pulls ranked name/value pairs out of a card element.
// ABOUTME: Picks the innermost name wrapper so provider ranks never leak into names.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use crate::layout::{element_text, NAME_LABEL, NAME_LINK, NAME_WRAPPER, ROWS, VALUE};

/// A raw ranked row as it appears on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    pub value: String,
}

/// Extracts every named row of `card`, in document order.
///
/// A missing card yields no rows. Rows without a resolvable name are skipped.
pub fn extract_rows(card: Option<ElementRef>) -> Vec<Row> {
    let Some(card) = card else {
        return Vec::new();
    };

    card.select(&ROWS).filter_map(parse_row).collect()
}

fn parse_row(row: ElementRef) -> Option<Row> {
    let mut name = row_name(row).unwrap_or_default();
    let value = row
        .select(&VALUE)
        .next()
        .map(|v| element_text(&v))
        .unwrap_or_default();

    name = stitch_split_name(name, &value);

    if name.is_empty() {
        return None;
    }
    Some(Row { name, value })
}

/// Name text of a row: the first link, else the first label, of the innermost wrapper.
fn row_name(row: ElementRef) -> Option<String> {
    let wrapper = innermost_wrapper(row)?;
    let tag = wrapper
        .select(&NAME_LINK)
        .next()
        .or_else(|| wrapper.select(&NAME_LABEL).next())?;
    Some(element_text(&tag))
}

/// Last name wrapper in `row` that does not itself contain another wrapper.
fn innermost_wrapper(row: ElementRef) -> Option<ElementRef> {
    row.select(&NAME_WRAPPER)
        .filter(|w| w.select(&NAME_WRAPPER).next().is_none())
        .last()
}

/// Repairs the one known case where the page splits "GPT-5" across the name and value.
fn stitch_split_name(name: String, value: &str) -> String {
    if name == "GPT" && value.starts_with('5') {
        return "GPT-5".to_string();
    }
    name
}
