// ABOUTME: Numeric parsing of raw leaderboard values for trend series.
// ABOUTME: Understands k/M unit suffixes (context sizes) and embedded prices or throughputs.

use once_cell::sync::Lazy;
use regex::Regex;
use topboard_scrape::Entry;

static UNIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([\d,.]+)\s*([kKmM])\b").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").unwrap());
static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)").unwrap());

/// Parses the leading float of `s`, ignoring trailing garbage (`"1.5.2"` -> `1.5`).
fn parse_float_prefix(s: &str) -> Option<f64> {
    FLOAT_PREFIX_RE
        .find(s)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Extracts a number from a raw value string.
///
/// `"128k"` -> 128000, `"10M"` -> 10000000, `"$0.15 / 1M"` -> 0.15,
/// `"1,5 tok/s"` -> 1.5. Returns `None` when no digits are present.
pub fn number_from_value(s: &str) -> Option<f64> {
    let s = s.trim();

    if let Some(caps) = UNIT_RE.captures(s) {
        let mantissa = caps[1].replacen(',', ".", 1);
        if let Some(n) = parse_float_prefix(&mantissa) {
            let factor = match &caps[2] {
                "k" | "K" => 1e3,
                _ => 1e6,
            };
            return Some(n * factor);
        }
    }

    let dotted = s.replace(',', ".");
    NUMBER_RE
        .find(&dotted)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Numeric value of an entry: its score, else the number in its raw value.
pub fn entry_number(entry: &Entry) -> Option<f64> {
    match entry {
        Entry::Score { score, .. } => Some(*score),
        Entry::Value { value, .. } => number_from_value(value),
    }
    .filter(|v| v.is_finite())
}
