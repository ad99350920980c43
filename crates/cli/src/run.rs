// ABOUTME: Wires the build pipeline: load markup, build payload and log, write files.
// ABOUTME: Also drives the history update from a previously written payload.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use topboard_history::{load_payload, update_history, HistoryReport};
use topboard_scrape::{build_log, build_payload_with, BuildLog, BuildOptions, Payload};

use crate::config::Config;
use crate::fetch::{build_client, fetch_page};
use crate::output::write_outputs;

/// Everything a successful build produced.
#[derive(Debug)]
pub struct BuildOutcome {
    pub payload: Payload,
    pub log: BuildLog,
    pub files: Vec<PathBuf>,
}

fn load_markup(config: &Config) -> Result<String> {
    if let Some(path) = &config.html_file {
        return fs::read_to_string(path)
            .with_context(|| format!("reading HTML file {}", path.display()));
    }
    let client = build_client(config.timeout)?;
    Ok(fetch_page(&client, &config.url)?)
}

/// Runs fetch -> extract -> write once.
pub fn run_build(config: &Config) -> Result<BuildOutcome> {
    let html = load_markup(config)?;

    let now = Utc::now();
    let opts = BuildOptions {
        with_table: config.with_table,
    };
    let payload = build_payload_with(&html, &config.url, now, opts);
    let log = build_log(&payload, &config.url, now);

    let snapshot = config.save_snapshot.then_some(html.as_str());
    let files = write_outputs(&config.out_dir, &payload, &log, snapshot)?;

    Ok(BuildOutcome {
        payload,
        log,
        files,
    })
}

/// Appends the payload at `input` to the history files in `dir`.
pub fn run_history(input: &Path, dir: &Path, date: Option<NaiveDate>) -> Result<HistoryReport> {
    let payload = load_payload(input)?;
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(update_history(&payload, dir, date)?)
}
