// ABOUTME: Appends one ranked line per section and date to history.csv.
// ABOUTME: Fields are always double-quoted; a date/section pair is written at most once.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, Writer, WriterBuilder};
use tracing::debug;
use topboard_scrape::{Entry, Payload, Section};

use crate::error::HistoryError;

/// Number of ranks recorded per line.
pub const RANKS: usize = 5;

/// Header line of a fresh history file.
pub fn header() -> String {
    let mut cols = vec!["date".to_string(), "section".to_string()];
    for i in 1..=RANKS {
        cols.push(format!("rank{}_name", i));
        cols.push(format!("rank{}_value", i));
    }
    cols.join(",")
}

fn entry_value(entry: &Entry) -> String {
    match entry {
        Entry::Score { score, .. } => score.to_string(),
        Entry::Value { value, .. } => value.clone(),
    }
}

/// Fields of one history line: date, section key, then `RANKS` name/value pairs padded with blanks.
pub fn section_record(date: &str, section: Section, entries: &[Entry]) -> Vec<String> {
    let mut fields = vec![date.to_string(), section.key().to_string()];
    for i in 0..RANKS {
        let (name, value) = entries
            .get(i)
            .map(|e| (e.name().to_string(), entry_value(e)))
            .unwrap_or_default();
        fields.push(name);
        fields.push(value);
    }
    fields
}

/// CSV writer that quotes every field and ends lines with `\n`.
pub fn line_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Date/section pairs already present in `text`.
fn recorded_pairs(text: &str) -> Result<HashSet<(String, String)>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut seen = HashSet::new();
    for record in rdr.records() {
        let record = record?;
        if let (Some(date), Some(section)) = (record.get(0), record.get(1)) {
            seen.insert((date.to_string(), section.to_string()));
        }
    }
    Ok(seen)
}

/// Appends today's lines for `payload` to the CSV at `path`, creating it if needed.
///
/// Returns the number of lines added.
pub fn update_csv(path: &Path, payload: &Payload, date: &str) -> Result<usize, HistoryError> {
    let existing = match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(HistoryError::io(path, e)),
    };
    let seen = match &existing {
        Some(text) => recorded_pairs(text).map_err(|e| HistoryError::csv(path, e))?,
        None => HashSet::new(),
    };

    let pending: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|s| !payload.section(*s).is_empty())
        .filter(|s| !seen.contains(&(date.to_string(), s.key().to_string())))
        .collect();
    if pending.is_empty() && existing.is_some() {
        debug!(path = %path.display(), "history csv already up to date");
        return Ok(0);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| HistoryError::io(path, e))?;
    match &existing {
        None => writeln!(file, "{}", header()),
        Some(text) if !text.is_empty() && !text.ends_with('\n') => writeln!(file),
        Some(_) => Ok(()),
    }
    .map_err(|e| HistoryError::io(path, e))?;

    let mut wtr = line_writer(file);
    for &section in &pending {
        wtr.write_record(section_record(date, section, payload.section(section)))
            .map_err(|e| HistoryError::csv(path, e))?;
    }
    wtr.flush().map_err(|e| HistoryError::io(path, e))?;

    debug!(path = %path.display(), added = pending.len(), "updated history csv");
    Ok(pending.len())
}
