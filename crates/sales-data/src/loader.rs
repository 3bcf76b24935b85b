//! Retrieval of the raw sales text.
//!
//! A [`SalesSource`] names exactly one resource, either a file on disk or an
//! http(s) URL, and [`SalesSource::load`] returns its full text content.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sales_core::error::{Result, SalesError};
use tracing::{debug, error, info};

/// Upper bound for a single HTTP fetch.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the sales data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalesSource {
    /// A file on the local filesystem.
    File(PathBuf),
    /// An http:// or https:// URL fetched with a single GET.
    Url(String),
}

impl SalesSource {
    /// Classify a user-supplied source string.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SalesSource::Url(trimmed.to_string())
        } else {
            SalesSource::File(PathBuf::from(trimmed))
        }
    }

    /// Read the whole resource as UTF-8 text.
    ///
    /// Performs a single read; nothing is retried. Every failure is returned
    /// as one of the load variants of [`SalesError`].
    pub async fn load(&self) -> Result<String> {
        info!("Loading sales data from {}", self);
        let result = match self {
            SalesSource::File(path) => read_file(path).await,
            SalesSource::Url(url) => fetch_url(url).await,
        };
        match &result {
            Ok(content) => debug!("Loaded {} bytes from {}", content.len(), self),
            Err(e) => error!("Error fetching the file: {}", e),
        }
        result
    }
}

impl fmt::Display for SalesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalesSource::File(path) => write!(f, "{}", path.display()),
            SalesSource::Url(url) => f.write_str(url),
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SalesError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

async fn fetch_url(url: &str) -> Result<String> {
    let http_error = |e: reqwest::Error| SalesError::Http {
        url: url.to_string(),
        message: e.to_string(),
    };

    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(http_error)?;

    let response = client.get(url).send().await.map_err(http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SalesError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(http_error)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = "date,sku,unitPrice,quantity,totalPrice\n2023-01-05,A1,10.00,2,20.00\n";

    // ── parse ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_file_path() {
        assert_eq!(
            SalesSource::parse("assets/sales_data.txt"),
            SalesSource::File(PathBuf::from("assets/sales_data.txt"))
        );
    }

    #[test]
    fn test_parse_urls() {
        assert_eq!(
            SalesSource::parse("http://example.com/sales.csv"),
            SalesSource::Url("http://example.com/sales.csv".to_string())
        );
        assert_eq!(
            SalesSource::parse("  HTTPS://example.com/sales.csv "),
            SalesSource::Url("HTTPS://example.com/sales.csv".to_string())
        );
    }

    #[test]
    fn test_display() {
        let source = SalesSource::Url("http://example.com/a.csv".to_string());
        assert_eq!(source.to_string(), "http://example.com/a.csv");
    }

    // ── File ──────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_load_file_returns_full_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let source = SalesSource::File(file.path().to_path_buf());
        let content = source.load().await.unwrap();
        assert_eq!(content, SAMPLE);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_file_read_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = SalesSource::File(missing.clone()).load().await.unwrap_err();
        match &err {
            SalesError::FileRead { path, .. } => assert_eq!(path, &missing),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_load_error());
    }

    // ── Url ───────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_load_url_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets/sales_data.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(1)
            .mount(&server)
            .await;

        let source = SalesSource::parse(&format!("{}/assets/sales_data.txt", server.uri()));
        let content = source.load().await.unwrap();
        assert_eq!(content, SAMPLE);
    }

    #[tokio::test]
    async fn test_load_url_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = SalesSource::parse(&format!("{}/missing.txt", server.uri()));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SalesError::HttpStatus { status: 404, .. }));
        assert!(err.display_message().starts_with("Error fetching the file:"));
    }

    #[tokio::test]
    async fn test_load_url_unreachable() {
        // Port 1 is reserved; nothing listens there.
        let source = SalesSource::Url("http://127.0.0.1:1/sales.csv".to_string());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SalesError::Http { .. }));
    }
}
