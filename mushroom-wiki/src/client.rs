//! Wikipedia page fetcher: one GET per lookup, fixed timeout and browser-like User-Agent.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, instrument};

use crate::error::{Result, WikiError};

/// Base URL page ids are appended to.
pub const WIKI_URL: &str = "https://en.wikipedia.org/wiki/";
/// Timeout for the whole request; a timeout is reported like any other transport failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Sent on every request; Wikipedia rejects some default library agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that was requested; used as the card's "Read More" link.
    pub url: String,
    pub html: String,
}

/// HTTP client for encyclopedia pages. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikiClient {
    /// Client for English Wikipedia.
    pub fn new() -> Result<Self> {
        Self::with_base_url(WIKI_URL)
    }

    /// Client for another base URL (a mirror, or a mock server in tests). The page id is
    /// appended verbatim, so the base should end with `/`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_url(&self, page: &str) -> String {
        format!("{}{}", self.base_url, page)
    }

    /// Fetches `page`. 404 → [`WikiError::NotFound`]; any other non-success status →
    /// [`WikiError::Status`]; connection problems and timeouts → [`WikiError::Http`].
    #[instrument(skip(self))]
    pub async fn fetch(&self, page: &str) -> Result<FetchedPage> {
        let url = self.page_url(page);
        debug!(url = %url, "Fetching page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            info!(url = %url, "Page not found");
            return Err(WikiError::NotFound(page.to_string()));
        }
        if !status.is_success() {
            return Err(WikiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let html = response.text().await?;
        info!(url = %url, bytes = html.len(), "Fetched page");
        Ok(FetchedPage { url, html })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_page_id() {
        let client = WikiClient::new().unwrap();
        assert_eq!(client.base_url(), WIKI_URL);
        assert_eq!(
            client.page_url("Shiitake"),
            "https://en.wikipedia.org/wiki/Shiitake"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/wiki/Morchella")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>morels</body></html>")
            .create_async()
            .await;

        let client = WikiClient::with_base_url(format!("{}/wiki/", server.url())).unwrap();
        let page = client.fetch("Morchella").await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.url, format!("{}/wiki/Morchella", server.url()));
        assert!(page.html.contains("morels"));
    }

    #[tokio::test]
    async fn test_fetch_maps_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _missing = server
            .mock("GET", "/wiki/Nope")
            .with_status(404)
            .with_body("<html>not here, but some page content</html>")
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/wiki/Broken")
            .with_status(500)
            .create_async()
            .await;

        let client = WikiClient::with_base_url(format!("{}/wiki/", server.url())).unwrap();

        match client.fetch("Nope").await {
            Err(WikiError::NotFound(page)) => assert_eq!(page, "Nope"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        match client.fetch("Broken").await {
            Err(WikiError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_http_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP connections.
        let client = WikiClient::with_base_url("http://127.0.0.1:9/wiki/").unwrap();
        assert!(matches!(
            client.fetch("Shiitake").await,
            Err(WikiError::Http(_))
        ));
    }
}
