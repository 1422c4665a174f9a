//! Example: scrape the configured free company and replace the local
//! member table with the result.
//!
//! Run from the workspace root:
//! `cargo run -p roster-db --example sync-roster`

use roster_core::{AppConfig, FreeCompanyId};
use roster_db::{members, Database};
use roster_scraper::RosterScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load_with_env()?;
    let fc_id = FreeCompanyId::new(&config.directory.free_company_id)?;

    println!("Scraping member directory for free company {fc_id}...");

    let scraper = RosterScraper::new(&config)?;
    let snapshot = scraper.fetch_all_members(&fc_id).await;

    println!(
        "Fetched {} members over {} page(s)",
        snapshot.members.len(),
        snapshot.pages_fetched
    );
    if !snapshot.outcome.is_complete() {
        eprintln!(
            "Warning: scrape ended early ({:?}); syncing the partial roster",
            snapshot.outcome
        );
    }

    let db_path = config.database_path()?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::new(&db_path).await?;
    db.run_migrations().await?;

    let written = members::replace_all(db.pool(), &snapshot.members).await?;
    println!(
        "Member table replaced: {} row(s) in {}",
        written,
        db_path.display()
    );

    db.close().await;
    Ok(())
}
