// ABOUTME: Maintains trends.json: per-section, per-name series of dated numeric values.
// ABOUTME: Appends at most one point per name and date.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use topboard_scrape::{Payload, Section};

use crate::error::HistoryError;
use crate::value::entry_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub value: f64,
}

/// section -> name -> series
pub type Trends = BTreeMap<String, BTreeMap<String, Vec<TrendPoint>>>;

/// Loads trends from `path`. A missing or unreadable file starts an empty history.
pub fn load_trends(path: &Path) -> Trends {
    let Ok(text) = fs::read_to_string(path) else {
        return Trends::new();
    };
    match serde_json::from_str(&text) {
        Ok(trends) => trends,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring invalid trends file");
            Trends::new()
        }
    }
}

/// Adds today's points from `payload`. Returns the number of points appended.
pub fn add_points(trends: &mut Trends, payload: &Payload, date: &str) -> usize {
    let mut added = 0;
    for section in Section::ALL {
        let entries = payload.section(section);
        if entries.is_empty() {
            continue;
        }
        let series_by_name = trends.entry(section.key().to_string()).or_default();
        for entry in entries {
            let Some(value) = entry_number(entry) else {
                continue;
            };
            let series = series_by_name.entry(entry.name().to_string()).or_default();
            if series.last().map(|p| p.date.as_str()) == Some(date) {
                continue;
            }
            series.push(TrendPoint {
                date: date.to_string(),
                value,
            });
            added += 1;
        }
    }
    added
}

/// Loads, extends and rewrites the trends file at `path`.
pub fn update_trends(path: &Path, payload: &Payload, date: &str) -> Result<usize, HistoryError> {
    let mut trends = load_trends(path);
    let added = add_points(&mut trends, payload, date);
    let json = serde_json::to_string_pretty(&trends).map_err(|e| HistoryError::json(path, e))?;
    fs::write(path, json).map_err(|e| HistoryError::io(path, e))?;
    debug!(path = %path.display(), added, "updated trends");
    Ok(added)
}
