// ABOUTME: Normalizer: turns raw rows into section entries.
// ABOUTME: Benchmark values become numeric scores; rows without a number are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::MAX_ENTRIES;
use crate::models::Entry;
use crate::rows::Row;
use crate::section::{Section, SectionKind};

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,3}(?:\.\d+)?)").unwrap());

/// Extracts the first numeric token of a benchmark value, e.g. `"92.3%"` -> `92.3`.
pub fn extract_score(value: &str) -> Option<f64> {
    let m = SCORE_RE.find(value)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Converts a single row for the given section kind.
pub fn normalize_row(kind: SectionKind, row: Row) -> Option<Entry> {
    match kind {
        SectionKind::Benchmark => {
            let score = extract_score(&row.value)?;
            Some(Entry::Score {
                name: row.name,
                score,
            })
        }
        SectionKind::Text => Some(Entry::Value {
            name: row.name,
            value: row.value,
        }),
    }
}

/// Normalizes a section's rows and keeps at most [`MAX_ENTRIES`].
///
/// The cap applies after dropping unscored rows.
pub fn normalize_rows(section: Section, rows: Vec<Row>) -> Vec<Entry> {
    rows.into_iter()
        .filter_map(|row| normalize_row(section.kind(), row))
        .take(MAX_ENTRIES)
        .collect()
}
