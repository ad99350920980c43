// ABOUTME: Fetcher: one blocking GET of the leaderboard page with browser-like headers.
// ABOUTME: Fails on transport errors and 4xx/5xx statuses; never retries.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::config;

/// Errors that abort a fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Builds the blocking client used for the page fetch.
pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));
    Client::builder()
        .user_agent(config::USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(FetchError::Client)
}

/// Fetches `url` and returns the body text.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    info!(%url, "fetching leaderboard page");
    let request_err = |source: reqwest::Error| FetchError::Request {
        url: url.to_string(),
        source,
    };
    let resp = client.get(parsed).send().map_err(request_err)?;

    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.text().map_err(request_err)?;
    info!(%url, status = status.as_u16(), bytes = body.len(), "fetched leaderboard page");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_fetch_sends_browser_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .header("user-agent", config::USER_AGENT)
                .header("accept", config::ACCEPT);
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body>ok</body></html>");
        });

        let client = build_client(Duration::from_secs(5)).unwrap();
        let body = fetch_page(&client, &server.url("/")).expect("fetch should succeed");
        mock.assert();
        assert!(body.contains("ok"));
    }

    #[test]
    fn test_fetch_error_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/down");
            then.status(503).body("busy");
        });

        let client = build_client(Duration::from_secs(5)).unwrap();
        let err = fetch_page(&client, &server.url("/down")).unwrap_err();
        mock.assert();
        match err {
            FetchError::Status { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_url() {
        let client = build_client(Duration::from_secs(5)).unwrap();
        let err = fetch_page(&client, "not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
