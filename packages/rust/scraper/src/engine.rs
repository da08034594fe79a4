//! Sequential page fetcher.
//!
//! Fetches each configured URL with one bounded GET, extracts its record,
//! and isolates failures per URL: a dead site is logged and skipped, never
//! aborting the batch. Input order is preserved in the output.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use profilekit_shared::{ProfileKitError, Result, ScrapedRecord};

use crate::extract::extract_record;

/// User-Agent string for fetch requests.
const USER_AGENT: &str = concat!("ProfileKit/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// ScrapeResult
// ---------------------------------------------------------------------------

/// Summary of a completed scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeResult {
    /// Number of pages successfully fetched and extracted.
    pub fetched: usize,
    /// Number of URLs skipped due to per-item failures.
    pub skipped: usize,
    /// Errors encountered (URL, error message).
    pub errors: Vec<(String, String)>,
    /// Total duration of the run.
    pub duration: Duration,
}

// ---------------------------------------------------------------------------
// Progress observer
// ---------------------------------------------------------------------------

/// Progress callback for reporting per-URL status.
pub trait ScrapeObserver: Send + Sync {
    /// Called after a page is fetched and its record extracted.
    fn page_scraped(&self, url: &str, current: usize, total: usize);
    /// Called when a URL is skipped due to an error.
    fn page_skipped(&self, url: &str, error: &str);
}

/// No-op observer for headless/test usage.
pub struct SilentObserver;

impl ScrapeObserver for SilentObserver {
    fn page_scraped(&self, _url: &str, _current: usize, _total: usize) {}
    fn page_skipped(&self, _url: &str, _error: &str) {}
}

// ---------------------------------------------------------------------------
// Scraper
// ---------------------------------------------------------------------------

/// Sequential fetcher over a fixed URL list.
pub struct Scraper {
    client: Client,
}

impl Scraper {
    /// Create a scraper with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(timeout)
            .build()
            .map_err(|e| ProfileKitError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch every URL in order, one at a time, collecting one record per
    /// success. Failures are logged, reported via `observer`, and skipped;
    /// the run itself never fails.
    pub async fn scrape(
        &self,
        urls: &[String],
        observer: &dyn ScrapeObserver,
    ) -> (ScrapeResult, Vec<ScrapedRecord>) {
        let start = std::time::Instant::now();
        let total = urls.len();

        let mut records: Vec<ScrapedRecord> = Vec::with_capacity(total);
        let mut errors: Vec<(String, String)> = Vec::new();

        info!(total, "starting scrape");

        for url in urls {
            match fetch_record(&self.client, url).await {
                Ok(record) => {
                    info!(%url, title = %record.title, "scraped");
                    observer.page_scraped(url, records.len() + 1, total);
                    records.push(record);
                }
                Err(e) => {
                    warn!(%url, error = %e, "skipping URL");
                    observer.page_skipped(url, &e.to_string());
                    errors.push((url.clone(), e.to_string()));
                }
            }
        }

        let result = ScrapeResult {
            fetched: records.len(),
            skipped: errors.len(),
            errors,
            duration: start.elapsed(),
        };

        info!(
            fetched = result.fetched,
            skipped = result.skipped,
            duration_ms = result.duration.as_millis(),
            "scrape completed"
        );

        (result, records)
    }
}

/// Fetch a single page and extract its record.
async fn fetch_record(client: &Client, url: &str) -> Result<ScrapedRecord> {
    let parsed =
        Url::parse(url).map_err(|e| ProfileKitError::parse(format!("invalid URL {url}: {e}")))?;

    debug!(%url, "fetching page");

    let response = client
        .get(parsed.as_str())
        .send()
        .await
        .map_err(|e| ProfileKitError::Network(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProfileKitError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProfileKitError::Network(format!("{url}: body read failed: {e}")))?;

    Ok(extract_record(url, &parsed, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scraper() -> Scraper {
        Scraper::new(Duration::from_secs(5)).expect("build scraper")
    }

    #[tokio::test]
    async fn scrapes_example_page() {
        let server = MockServer::start().await;
        let html = r#"<html><head>
            <title>Example</title>
            <meta name="description" content="Demo site">
        </head><body>
            <p>A.</p><p>B.</p><p>C.</p>
        </body></html>"#;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&server)
            .await;

        let url = format!("{}/", server.uri());
        let (result, records) = scraper().scrape(&[url.clone()], &SilentObserver).await;

        assert_eq!(result.fetched, 1);
        assert_eq!(result.skipped, 0);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.url, url);
        assert_eq!(record.title, "Example");
        assert_eq!(record.description, "Demo site");
        assert_eq!(record.content_sample, "A. B. C.");
        // Mock server binds an explicit port, so the authority keeps it.
        assert!(url.contains(&record.domain));
    }

    #[tokio::test]
    async fn non_200_is_skipped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/gone", server.uri());
        let (result, records) = scraper().scrape(&[url.clone()], &SilentObserver).await;

        assert_eq!(result.fetched, 0);
        assert_eq!(result.skipped, 1);
        assert!(records.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, url);
        assert!(result.errors[0].1.contains("404"));
    }

    #[tokio::test]
    async fn one_bad_site_never_aborts_the_batch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/first"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><head><title>First</title></head></html>"),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/last"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><head><title>Last</title></head></html>"),
            )
            .mount(&server)
            .await;

        let urls = vec![
            format!("{}/first", server.uri()),
            format!("{}/broken", server.uri()),
            "not a url at all".to_string(),
            format!("{}/last", server.uri()),
        ];

        let (result, records) = scraper().scrape(&urls, &SilentObserver).await;

        // Input order preserved, failures omitted, no fabricated records.
        assert_eq!(result.fetched, 2);
        assert_eq!(result.skipped, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].title, "Last");
        for record in &records {
            assert!(urls.contains(&record.url));
        }
    }

    #[tokio::test]
    async fn connection_failure_is_skipped() {
        // Nothing listens on this port; reqwest reports a connect error.
        let urls = vec!["http://127.0.0.1:9/".to_string()];
        let (result, records) = scraper().scrape(&urls, &SilentObserver).await;

        assert_eq!(result.fetched, 0);
        assert_eq!(result.skipped, 1);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn page_with_no_title_gets_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><p>No head here.</p></body></html>"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/", server.uri());
        let (_, records) = scraper().scrape(&[url], &SilentObserver).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Unknown Title");
        assert_eq!(records[0].description, "");
    }
}
