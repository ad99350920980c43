// ABOUTME: Writer: serializes the payload, build log and optional HTML snapshot to disk.
// ABOUTME: Files are plain overwrites; a crash mid-write may leave a partial file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use topboard_scrape::{BuildLog, Payload};

pub const PAYLOAD_FILE: &str = "top-leaderboards.json";
pub const BUILD_LOG_FILE: &str = "build-log.json";
pub const SNAPSHOT_FILE: &str = "leaderboard-snapshot.html";

/// Writes `value` as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Writes all output files into `out_dir` and returns their paths.
pub fn write_outputs(
    out_dir: &Path,
    payload: &Payload,
    log: &BuildLog,
    snapshot: Option<&str>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let payload_path = out_dir.join(PAYLOAD_FILE);
    write_json(&payload_path, payload)?;

    let log_path = out_dir.join(BUILD_LOG_FILE);
    write_json(&log_path, log)?;

    let mut written = vec![payload_path, log_path];
    if let Some(html) = snapshot {
        let snap_path = out_dir.join(SNAPSHOT_FILE);
        fs::write(&snap_path, html)
            .with_context(|| format!("writing {}", snap_path.display()))?;
        written.push(snap_path);
    }

    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    Ok(written)
}
