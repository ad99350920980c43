// ABOUTME: Run configuration for topboard: source URL, output directory, timeout and switches.
// ABOUTME: Resolves CLI flags over environment variables over built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Page scraped when nothing else is configured.
pub const DEFAULT_URL: &str = "https://llm-stats.com/";

/// Environment variable overriding the source URL.
pub const URL_ENV: &str = "LEADERBOARD_URL";

/// Environment variable enabling the HTML snapshot when set to `true`.
pub const SNAPSHOT_ENV: &str = "SAVE_SNAPSHOT";

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub out_dir: PathBuf,
    pub timeout: Duration,
    pub save_snapshot: bool,
    pub with_table: bool,
    /// Read markup from this file instead of fetching `url`.
    pub html_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            out_dir: PathBuf::from("."),
            timeout: DEFAULT_TIMEOUT,
            save_snapshot: false,
            with_table: false,
            html_file: None,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Picks the source URL: flag, then environment, then [`DEFAULT_URL`]. Blank values count as unset.
pub fn resolve_url(flag: Option<&str>, env: Option<&str>) -> String {
    non_blank(flag)
        .or_else(|| non_blank(env))
        .unwrap_or(DEFAULT_URL)
        .to_string()
}

/// Interprets the snapshot environment variable.
pub fn snapshot_from_env(env: Option<&str>) -> bool {
    non_blank(env)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_precedence() {
        assert_eq!(resolve_url(None, None), DEFAULT_URL);
        assert_eq!(resolve_url(None, Some("https://a.test/")), "https://a.test/");
        assert_eq!(
            resolve_url(Some("https://b.test/"), Some("https://a.test/")),
            "https://b.test/"
        );
    }

    #[test]
    fn test_blank_url_falls_through() {
        assert_eq!(resolve_url(None, Some("   ")), DEFAULT_URL);
        assert_eq!(resolve_url(Some(""), Some(" https://a.test/ ")), "https://a.test/");
    }

    #[test]
    fn test_snapshot_from_env() {
        assert!(snapshot_from_env(Some("true")));
        assert!(snapshot_from_env(Some("TRUE ")));
        assert!(!snapshot_from_env(Some("1")));
        assert!(!snapshot_from_env(None));
    }

    #[test]
    fn test_default_config() {
        let c = Config::default();
        assert_eq!(c.url, DEFAULT_URL);
        assert_eq!(c.timeout, Duration::from_secs(30));
        assert!(!c.save_snapshot);
        assert!(c.html_file.is_none());
    }
}
