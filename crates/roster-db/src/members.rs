//! Member table operations.
//!
//! The member table is authoritative-by-replacement: every roster sync
//! clears it and writes the freshly scraped snapshot, so stale names drop
//! out without any diffing. Insertion order is preserved (rowid), which
//! keeps the scraper's first-seen order.

use chrono::Utc;
use sqlx::{Pool, Row, Sqlite};

/// One row of the member table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    /// Qualified member name (`"<display name>\n<world>"`)
    pub name: String,
    /// When this roster snapshot was written (RFC3339)
    pub synced_at: String,
}

/// Replace the member table with a new roster snapshot.
///
/// Runs in a single transaction: the table is cleared, then each name is
/// inserted with the same sync timestamp. Duplicate names in the input are
/// ignored at the storage layer (`INSERT OR IGNORE`), keeping the first
/// occurrence. Returns the number of rows written.
///
/// # Errors
/// Returns `sqlx::Error` if the transaction fails; nothing is written in
/// that case.
#[allow(clippy::cast_possible_truncation)]
pub async fn replace_all(pool: &Pool<Sqlite>, names: &[String]) -> Result<usize, sqlx::Error> {
    let synced_at = Utc::now().to_rfc3339();
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM members").execute(&mut *tx).await?;

    let mut inserted = 0usize;
    for name in names {
        let result = sqlx::query("INSERT OR IGNORE INTO members (name, synced_at) VALUES (?, ?)")
            .bind(name)
            .bind(&synced_at)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected() as usize;
    }

    tx.commit().await?;

    tracing::info!(members = inserted, "Member table replaced");
    Ok(inserted)
}

/// Get all members in insertion (first-seen) order.
///
/// # Errors
/// Returns `sqlx::Error` if the query fails.
pub async fn get_all(pool: &Pool<Sqlite>) -> Result<Vec<MemberRecord>, sqlx::Error> {
    let rows = sqlx::query("SELECT name, synced_at FROM members ORDER BY rowid")
        .fetch_all(pool)
        .await?;

    let mut members = Vec::with_capacity(rows.len());
    for row in rows {
        members.push(MemberRecord {
            name: row.try_get("name")?,
            synced_at: row.try_get("synced_at")?,
        });
    }

    Ok(members)
}

/// Count the members currently in the table.
///
/// # Errors
/// Returns `sqlx::Error` if the query fails.
pub async fn count(pool: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await
}
