// ABOUTME: Leaderboard extraction library for topboard.
// ABOUTME: Locates section cards, extracts ranked rows, normalizes scores and builds the JSON payload.

//! topboard-scrape - extracts ranked lists from the leaderboard page.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use topboard_scrape::build_payload;
//!
//! let payload = build_payload("<html></html>", "https://llm-stats.com/", Utc::now());
//! assert!(payload.code.is_empty());
//! ```

pub mod card;
pub mod layout;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod rows;
pub mod section;
pub mod table;

pub use card::locate_card;
pub use models::{BuildLog, Counts, Entry, Payload, TableRow};
pub use normalize::extract_score;
pub use payload::{build_log, build_payload, build_payload_with, utc_timestamp, BuildOptions};
pub use rows::{extract_rows, Row};
pub use section::{Section, SectionKind};
pub use table::extract_main_table;
