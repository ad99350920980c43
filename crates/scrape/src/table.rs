// ABOUTME: Extracts the page's main model table (organization, model, pricing, benchmark columns).
// ABOUTME: Columns are found by normalized header text; organizations are derived from logo slugs.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::layout::{element_text, normalize_whitespace};
use crate::models::TableRow;

/// Default number of table rows kept.
pub const MAX_TABLE_ROWS: usize = 30;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static HEADER_CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("thead th").unwrap());
static BODY_ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody tr").unwrap());
static CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static LOGO_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/([^/?#]+)\.(svg|png|jpe?g|webp)(\?.*)?$").unwrap());
static LOGO_WORDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(system\s+)?logo\b|\bicon\b").unwrap());
static SLUG_SEPARATORS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_]+").unwrap());

const PRETTY_ORGS: &[(&str, &str)] = &[
    ("xai", "xAI"),
    ("openai", "OpenAI"),
    ("google", "Google"),
    ("anthropic", "Anthropic"),
    ("meta", "Meta"),
    ("microsoft", "Microsoft"),
    ("groq", "Groq"),
    ("cerebras", "Cerebras"),
    ("sambanova", "SambaNova"),
    ("deepseek", "DeepSeek"),
    ("deepinfra", "DeepInfra"),
    ("novita", "Novita"),
    ("qwen", "Qwen"),
    ("mistral", "Mistral"),
    ("nvidia", "NVIDIA"),
];

/// Normalizes a header label: lowercase, non-alphanumeric runs to one space.
pub fn normalize_header(s: &str) -> String {
    let lower = s.to_lowercase();
    NON_ALNUM_RE.replace_all(&lower, " ").trim().to_string()
}

/// Uppercases the first character of every word.
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !is_word;
    }
    out
}

/// Display name for a logo slug such as `openai` or `moonshot-ai`.
pub fn org_from_slug(slug: &str) -> String {
    let slug = slug.to_lowercase();
    if slug.is_empty() {
        return String::new();
    }
    if let Some((_, pretty)) = PRETTY_ORGS.iter().find(|(k, _)| *k == slug) {
        return pretty.to_string();
    }
    capitalize_words(&SLUG_SEPARATORS_RE.replace_all(&slug, " "))
}

/// Display name from an organization cell's text, minus "logo"/"icon" noise.
pub fn org_from_text(s: &str) -> String {
    let stripped = LOGO_WORDS_RE.replace_all(s, "");
    let cleaned = normalize_whitespace(&stripped);
    if cleaned.eq_ignore_ascii_case("xai") {
        return "xAI".to_string();
    }
    capitalize_words(&cleaned)
}

/// File stem of a logo URL, lowercased (`/logos/xai.svg` -> `xai`).
pub fn logo_slug(src: &str) -> Option<String> {
    LOGO_SLUG_RE
        .captures(src)
        .map(|caps| caps[1].to_lowercase())
}

#[derive(Debug, Default)]
struct Cell {
    text: String,
    aria: String,
    alt: String,
    title: String,
    content: String,
    logo: String,
}

fn is_hidden(el: ElementRef) -> bool {
    let v = el.value();
    v.attr("hidden").is_some()
        || v.attr("style")
            .is_some_and(|s| s.replace(' ', "").contains("display:none"))
}

/// Text a browser would show for `td`: text under `hidden` or `display:none` elements is skipped.
fn visible_text(td: ElementRef) -> String {
    let parts: Vec<&str> = td
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .take_while(|a| a.id() != td.id())
                .filter_map(ElementRef::wrap)
                .any(is_hidden);
            (!hidden).then_some(&**text)
        })
        .collect();
    normalize_whitespace(&parts.concat())
}

impl Cell {
    fn read(td: ElementRef, base: Option<&Url>) -> Self {
        let img = td.select(&IMG).next();
        let attr = |el: Option<ElementRef>, name: &str| {
            el.and_then(|e| e.value().attr(name))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        let src = attr(img, "src");
        let logo = if src.is_empty() {
            src
        } else {
            base.and_then(|b| b.join(&src).ok())
                .map(|u| u.to_string())
                .unwrap_or(src)
        };
        Cell {
            text: visible_text(td),
            aria: attr(Some(td), "aria-label"),
            alt: attr(img, "alt"),
            title: attr(Some(td), "title"),
            content: element_text(&td),
            logo,
        }
    }

    fn value(&self) -> String {
        [&self.text, &self.aria, &self.alt, &self.title, &self.content]
            .into_iter()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}

struct Columns(HashMap<String, usize>);

impl Columns {
    fn pick<'c>(&self, cells: &'c [Cell], key: &str) -> Option<&'c Cell> {
        self.0.get(key).and_then(|&i| cells.get(i))
    }

    fn value(&self, cells: &[Cell], keys: &[&str]) -> String {
        keys.iter()
            .map(|k| self.pick(cells, k).map(Cell::value).unwrap_or_default())
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    }
}

fn headers_of(table: ElementRef) -> Vec<String> {
    table
        .select(&HEADER_CELLS)
        .map(|th| normalize_header(&element_text(&th)))
        .collect()
}

/// Extracts up to `max_rows` rows of the first table with `organization` and `model` columns.
///
/// `source` resolves relative logo URLs. A page without such a table yields no rows.
pub fn extract_main_table(doc: &Html, source: &str, max_rows: usize) -> Vec<TableRow> {
    let Some((table, headers)) = doc.select(&TABLE).find_map(|t| {
        let headers = headers_of(t);
        let wanted = headers.iter().any(|h| h == "organization")
            && headers.iter().any(|h| h == "model");
        wanted.then_some((t, headers))
    }) else {
        return Vec::new();
    };

    let base = Url::parse(source).ok();
    let columns = Columns(
        headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| (h, i))
            .collect(),
    );

    table
        .select(&BODY_ROWS)
        .take(max_rows)
        .map(|tr| {
            let cells: Vec<Cell> = tr.select(&CELLS).map(|td| Cell::read(td, base.as_ref())).collect();
            build_row(&columns, &cells)
        })
        .collect()
}

fn build_row(columns: &Columns, cells: &[Cell]) -> TableRow {
    let org_cell = columns.pick(cells, "organization");
    let organization_logo = org_cell.map(|c| c.logo.clone()).unwrap_or_default();
    let mut organization = logo_slug(&organization_logo)
        .map(|slug| org_from_slug(&slug))
        .unwrap_or_default();
    if organization.is_empty() {
        organization = org_from_text(&org_cell.map(Cell::value).unwrap_or_default());
    }

    TableRow {
        organization,
        organization_logo,
        model: columns.value(cells, &["model"]),
        license: columns.value(cells, &["license"]),
        parameters_b: columns.value(cells, &["parameters b", "parameters"]),
        context: columns.value(cells, &["context"]),
        input_per_m: columns.value(cells, &["input m"]),
        output_per_m: columns.value(cells, &["output m"]),
        gpqa: columns.value(cells, &["gpqa"]),
        mmlu: columns.value(cells, &["mmlu"]),
        mmlu_pro: columns.value(cells, &["mmlu pro"]),
    }
}
