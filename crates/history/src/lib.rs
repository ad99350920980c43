// ABOUTME: History builder for topboard: records daily leaderboard snapshots.
// ABOUTME: Appends to history.csv and trends.json from a previously written payload.

pub mod csv_file;
pub mod error;
pub mod trends;
pub mod value;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;
use topboard_scrape::Payload;

pub use error::HistoryError;
pub use trends::{load_trends, TrendPoint, Trends};
pub use value::number_from_value;

pub const CSV_FILE: &str = "history.csv";
pub const TRENDS_FILE: &str = "trends.json";

/// What a history update wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReport {
    pub date: String,
    pub csv_path: PathBuf,
    pub trends_path: PathBuf,
    pub csv_lines_added: usize,
    pub trend_points_added: usize,
}

/// Reads a payload written by the build step.
///
/// Only the sections matter here, so payloads without `source` or
/// `last_updated` are accepted.
pub fn load_payload(path: &Path) -> Result<Payload, HistoryError> {
    let text = fs::read_to_string(path).map_err(|_| HistoryError::MissingSource(path.to_path_buf()))?;
    serde_json::from_str(&text).map_err(|e| HistoryError::json(path, e))
}

/// Records `payload` under `date` in `dir`, creating the directory if needed.
pub fn update_history(
    payload: &Payload,
    dir: &Path,
    date: NaiveDate,
) -> Result<HistoryReport, HistoryError> {
    fs::create_dir_all(dir).map_err(|e| HistoryError::io(dir, e))?;
    let date = date.format("%Y-%m-%d").to_string();

    let csv_path = dir.join(CSV_FILE);
    let trends_path = dir.join(TRENDS_FILE);
    let csv_lines_added = csv_file::update_csv(&csv_path, payload, &date)?;
    let trend_points_added = trends::update_trends(&trends_path, payload, &date)?;

    info!(%date, csv_lines_added, trend_points_added, "history updated");
    Ok(HistoryReport {
        date,
        csv_path,
        trends_path,
        csv_lines_added,
        trend_points_added,
    })
}
