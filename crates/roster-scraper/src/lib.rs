//! fc-roster scraper - Lodestone member directory scraping.
//!
//! This crate produces a deduplicated, ordered snapshot of all member names
//! visible in a free company's paginated Lodestone directory. The directory
//! is an external, uncontrolled site, so the scraper copes with markup
//! drift (ordered selector fallback), transient network failures (bounded
//! retries with a fixed pause), and missing end-of-listing signals (a hard
//! page ceiling).
//!
//! Faults never cross the scraper boundary: [`RosterScraper::fetch_all_members`]
//! always returns a [`RosterSnapshot`], possibly partial, with a
//! [`ScrapeOutcome`] tag saying how the run ended.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_core::{AppConfig, FreeCompanyId};
//! use roster_scraper::RosterScraper;
//!
//! let config = AppConfig::load_with_env()?;
//! let scraper = RosterScraper::new(&config)?;
//! let fc_id = FreeCompanyId::new(&config.directory.free_company_id)?;
//!
//! let snapshot = scraper.fetch_all_members(&fc_id).await;
//! println!("{} members ({:?})", snapshot.members.len(), snapshot.outcome);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod fetch;
pub mod page;
pub mod scraper;
pub mod url_builder;

// Re-export commonly used types
pub use error::{Result, ScrapeError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use page::{parse_member_page, MemberPage};
pub use scraper::{RosterScraper, RosterSnapshot, ScrapeOutcome};
pub use url_builder::member_page_url;
