//! Page fetching seam.
//!
//! The paging loop talks to the directory through the [`PageFetcher`]
//! trait so the whole fetch-parse-paginate flow can be exercised against
//! scripted responses in tests. [`HttpFetcher`] is the production
//! implementation over `reqwest`.

use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches one directory page body by URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the HTML body at `url`.
    ///
    /// # Errors
    /// Returns [`ScrapeError`] on transport failure or a non-success status.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// HTTP implementation of [`PageFetcher`].
///
/// The client identifies itself with a fixed User-Agent and applies a
/// request timeout; both come from [`roster_core::ScrapingConfig`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build an HTTP fetcher with the given client identification and
    /// request timeout.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Http`] if the HTTP client cannot be created.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_fetcher() {
        let fetcher = HttpFetcher::new("test-agent/1.0", Duration::from_secs(5));
        assert!(fetcher.is_ok());
    }
}
