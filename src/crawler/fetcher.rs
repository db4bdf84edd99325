//! HTTP fetcher implementation
//!
//! Every page the crawler reads goes through [`PageFetcher`]: one GET, no retries, and any
//! failure is logged and turned into `None` so a single bad page never stops a stage.

use crate::HarvestError;
use reqwest::Client;
use scraper::Html;

/// Builds an HTTP client with the configured user agent
///
/// Timeouts and redirects are left at the transport defaults.
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages and parses them into HTML documents
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and parses a page, logging and swallowing any failure
    ///
    /// # Returns
    ///
    /// * `Some(Html)` - The page answered with a success status and its body was read
    /// * `None` - Transport error, non-success status, or unreadable body
    pub async fn fetch(&self, url: &str) -> Option<Html> {
        match self.fetch_body(url).await {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                tracing::warn!("Error fetching URL {}: {}", url, e);
                None
            }
        }
    }

    /// Fetches the raw body of a page
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Response body
    /// * `Err(HarvestError::Http)` - The request or body read failed
    /// * `Err(HarvestError::HttpStatus)` - The server answered with a non-success status
    pub async fn fetch_body(&self, url: &str) -> Result<String, HarvestError> {
        tracing::debug!("Visit {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })
    }
}
