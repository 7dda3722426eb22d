//! Repository for the `analytics` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::analytics::AnalyticsRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, page, date, views";

/// Provides operations for daily per-page view counters.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Record one page view for `(page, date)`.
    ///
    /// Find-or-create and increment in a single atomic upsert, so
    /// concurrent views of the same page never lose counts.
    pub async fn track(
        pool: &PgPool,
        page: &str,
        date: NaiveDate,
    ) -> Result<AnalyticsRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics (page, date, views)
             VALUES ($1, $2, 1)
             ON CONFLICT ON CONSTRAINT uq_analytics_page_date
             DO UPDATE SET views = analytics.views + 1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnalyticsRecord>(&query)
            .bind(page)
            .bind(date)
            .fetch_one(pool)
            .await
    }

    /// Fetch per-page counters on or after `since`, oldest first.
    ///
    /// Returns the raw `(page, date, views)` rows; grouping by date for a
    /// chart is the caller's concern, not this layer's.
    pub async fn list_since(
        pool: &PgPool,
        since: NaiveDate,
    ) -> Result<Vec<AnalyticsRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM analytics WHERE date >= $1 ORDER BY date");
        sqlx::query_as::<_, AnalyticsRecord>(&query)
            .bind(since)
            .fetch_all(pool)
            .await
    }
}
