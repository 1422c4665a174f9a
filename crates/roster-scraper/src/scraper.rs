//! The fetch-parse-paginate loop.
//!
//! [`RosterScraper::fetch_all_members`] walks the member directory one page
//! at a time, in increasing page order, because each page's pager control
//! decides whether the next fetch happens at all. Every fault degrades to
//! returning whatever has been accumulated so far; nothing is raised past
//! the boundary.

use crate::error::Result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::page::parse_member_page;
use crate::url_builder::member_page_url;
use roster_core::{AppConfig, FreeCompanyId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Total fetch attempts per page before giving up on the scrape.
const MAX_ATTEMPTS: u32 = 3;

/// Fixed pause before every attempt except the first. Deliberately flat
/// rather than exponential: the retry count is small and the directory's
/// rate tolerance is unknown.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Hard ceiling on pages fetched per invocation, independent of what the
/// pager claims. Bounds worst-case cost against a misbehaving directory.
const MAX_PAGES: u32 = 10;

/// How a scrape run ended.
///
/// Simple callers can ignore this and use [`RosterSnapshot::members`]
/// alone; every variant still carries a usable (possibly empty) roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrapeOutcome {
    /// The last page was reached: a page without a next-page control.
    Complete,
    /// A page failed all its fetch attempts; the roster stops at the
    /// previous page.
    PartialNetworkFailure,
    /// No entry selector recognized the page markup. This also covers a
    /// directory with no members at all; the source gives no way to tell
    /// the two apart.
    PartialUnrecognizedMarkup,
    /// The page ceiling was hit while the directory still advertised more.
    PartialLimitReached,
}

impl ScrapeOutcome {
    /// Whether the directory's end was reached normally.
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Result of one scrape invocation: the roster plus how the run ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Qualified member names (`"<name>\n<world>"`), deduplicated,
    /// in first-seen order across pages.
    pub members: Vec<String>,
    /// How the paging loop terminated.
    pub outcome: ScrapeOutcome,
    /// Number of pages successfully fetched.
    pub pages_fetched: u32,
}

/// Scrapes a free company's full member roster from the Lodestone.
pub struct RosterScraper<F = HttpFetcher> {
    fetcher: F,
    base_url: String,
    world: String,
}

impl RosterScraper<HttpFetcher> {
    /// Build a scraper over HTTP from the application configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(
            &config.scraping.user_agent,
            Duration::from_secs(config.scraping.timeout_secs),
        )?;
        Ok(Self::with_fetcher(
            fetcher,
            config.directory.base_url.clone(),
            config.directory.world.clone(),
        ))
    }
}

impl<F: PageFetcher> RosterScraper<F> {
    /// Build a scraper over an arbitrary page fetcher.
    pub fn with_fetcher(fetcher: F, base_url: impl Into<String>, world: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            world: world.into(),
        }
    }

    /// Fetch the complete member roster for a free company.
    ///
    /// Walks the paginated directory starting at page 1, qualifying each
    /// extracted name with the world suffix and keeping the first
    /// occurrence of every qualified name. Never fails: network and markup
    /// faults terminate the walk early and the snapshot carries whatever
    /// was gathered, tagged with the termination cause.
    pub async fn fetch_all_members(&self, fc_id: &FreeCompanyId) -> RosterSnapshot {
        let mut members: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut pages_fetched = 0u32;
        let mut page = 1u32;

        let outcome = loop {
            if page > MAX_PAGES {
                tracing::warn!(fc_id = %fc_id, "Page ceiling reached, stopping scrape");
                break ScrapeOutcome::PartialLimitReached;
            }

            let url = member_page_url(&self.base_url, fc_id, page);
            tracing::debug!(page, %url, "Fetching directory page");

            let html = match self.fetch_page_with_retry(&url).await {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(
                        page,
                        error = %e,
                        "Page failed all attempts, returning partial roster"
                    );
                    break ScrapeOutcome::PartialNetworkFailure;
                }
            };
            pages_fetched += 1;

            let parsed = parse_member_page(&html);
            if parsed.entry_count == 0 {
                tracing::warn!(page, "No member entries recognized, stopping scrape");
                break ScrapeOutcome::PartialUnrecognizedMarkup;
            }
            tracing::debug!(page, entries = parsed.entry_count, "Parsed directory page");

            for name in parsed.names {
                let qualified = format!("{name}\n{}", self.world);
                if seen.insert(qualified.clone()) {
                    members.push(qualified);
                }
            }

            // Absence of the pager control is the authoritative
            // end-of-listing signal, checked before the ceiling.
            if !parsed.has_next {
                tracing::info!(page, members = members.len(), "Reached last directory page");
                break ScrapeOutcome::Complete;
            }

            page += 1;
        };

        RosterSnapshot {
            members,
            outcome,
            pages_fetched,
        }
    }

    /// Fetch one page with up to [`MAX_ATTEMPTS`] attempts and a fixed
    /// [`RETRY_DELAY`] pause before each attempt after the first.
    async fn fetch_page_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                tokio::time::sleep(RETRY_DELAY).await;
            }

            match self.fetcher.fetch_page(url).await {
                Ok(html) => return Ok(html),
                Err(e) => {
                    tracing::warn!(
                        %url,
                        attempt = attempt + 1,
                        max_attempts = MAX_ATTEMPTS,
                        error = %e,
                        "Fetch attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.expect("last_error is Some after MAX_ATTEMPTS attempts"))
    }
}
