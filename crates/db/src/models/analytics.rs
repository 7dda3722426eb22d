//! Page-view analytics models.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use folio_core::types::DbId;

/// A daily per-page view counter row from the `analytics` table.
///
/// `(page, date)` is unique; the counter is incremented atomically in the
/// database. The time-series endpoint returns these rows as-is; grouping
/// by date is the charting caller's concern.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnalyticsRecord {
    pub id: DbId,
    pub page: String,
    pub date: NaiveDate,
    pub views: i64,
}
