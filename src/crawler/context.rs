use crate::config::{Config, SelectorSchema};
use crate::crawler::fetcher::{build_http_client, PageFetcher};
use crate::HarvestError;
use url::Url;

/// Shared, read-only state every crawl stage borrows
#[derive(Debug, Clone)]
pub struct CrawlContext {
    pub fetcher: PageFetcher,
    pub schema: SelectorSchema,
    pub base_url: Url,
}

impl CrawlContext {
    /// Builds the HTTP client and compiles the selector schema for a configuration
    pub fn from_config(config: &Config) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self {
            fetcher: PageFetcher::new(client),
            schema: SelectorSchema::compile(config)?,
            base_url: Url::parse(&config.base_url)?,
        })
    }
}
