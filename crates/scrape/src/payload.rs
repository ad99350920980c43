// ABOUTME: Payload Builder: runs locate -> extract -> normalize for every section.
// ABOUTME: Also builds the build log and formats UTC timestamps.

use chrono::{DateTime, SecondsFormat, Utc};
use scraper::Html;
use tracing::{debug, warn};

use crate::card::locate_card;
use crate::models::{BuildLog, Entry, Payload};
use crate::normalize::normalize_rows;
use crate::rows::extract_rows;
use crate::section::Section;
use crate::table::{extract_main_table, MAX_TABLE_ROWS};

/// Knobs for payload building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Also extract the main model table into `Payload::table`.
    pub with_table: bool,
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn utc_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Extracts the entries of one section from a parsed document.
pub fn extract_section(doc: &Html, section: Section) -> Vec<Entry> {
    let Some(card) = locate_card(doc, section) else {
        warn!(section = %section, title = section.title(), "section heading not found");
        return Vec::new();
    };
    let rows = extract_rows(Some(card));
    let found = rows.len();
    let entries = normalize_rows(section, rows);
    debug!(section = %section, rows = found, kept = entries.len(), "extracted section");
    entries
}

/// Builds the payload for `html` fetched from `source` at `now`.
///
/// Deterministic for a given input apart from `now`.
pub fn build_payload(html: &str, source: &str, now: DateTime<Utc>) -> Payload {
    build_payload_with(html, source, now, BuildOptions::default())
}

pub fn build_payload_with(
    html: &str,
    source: &str,
    now: DateTime<Utc>,
    opts: BuildOptions,
) -> Payload {
    let doc = Html::parse_document(html);

    let mut payload = Payload {
        source: source.to_string(),
        last_updated: utc_timestamp(now),
        ..Default::default()
    };
    for section in Section::ALL {
        *payload.section_mut(section) = extract_section(&doc, section);
    }
    if opts.with_table {
        payload.table = Some(extract_main_table(&doc, source, MAX_TABLE_ROWS));
    }
    payload
}

/// Builds the debug log describing a payload.
pub fn build_log(payload: &Payload, fetched_from: &str, now: DateTime<Utc>) -> BuildLog {
    BuildLog {
        fetched_from: fetched_from.to_string(),
        utc: utc_timestamp(now),
        counts: payload.counts(),
    }
}
