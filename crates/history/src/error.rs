// ABOUTME: Error types for history building.
// ABOUTME: Provides HistoryError with Io, Json, Csv and MissingSource variants carrying the offending path.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while updating the history files.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON file could not be parsed or serialized.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An existing history.csv could not be read as CSV, or a line could not be written.
    #[error("invalid CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The leaderboard payload to record does not exist.
    #[error("{} not found", .0.display())]
    MissingSource(PathBuf),
}

impl HistoryError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        HistoryError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        HistoryError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
