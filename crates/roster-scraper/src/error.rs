use thiserror::Error;

/// Errors raised while fetching a single directory page.
///
/// These never escape [`crate::RosterScraper::fetch_all_members`]; the
/// paging loop absorbs them into the snapshot's outcome tag.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure (timeout, connection error, bad body).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory answered with a non-success status.
    #[error("directory returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// URL that was requested
        url: String,
    },
}

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
