//! Handlers for page-view tracking and the admin analytics dashboard.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use folio_db::models::analytics::AnalyticsRecord;
use folio_db::repositories::{AnalyticsRepo, DashboardRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::DaysParams;
use crate::state::AppState;

/// Default and maximum window for the page-views time series.
const DEFAULT_DAYS: i64 = 30;
const MAX_DAYS: i64 = 365;

/// Request body for `POST /track`.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub page: String,
}

/// Flat summary record for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_views: i64,
    pub total_revenue: f64,
    pub total_posts: i64,
    pub total_products: i64,
    pub total_orders: i64,
    pub total_subscribers: i64,
    pub unread_messages: i64,
}

/// POST /api/v1/track
///
/// Record one view of `page` for today. Fire-and-forget: a failed counter
/// write is logged and still answers 204, because a broken counter must
/// never break a page view.
pub async fn track(State(state): State<AppState>, Json(input): Json<TrackRequest>) -> StatusCode {
    let page = input.page.trim();
    if page.is_empty() {
        return StatusCode::NO_CONTENT;
    }

    let today = Utc::now().date_naive();
    if let Err(e) = AnalyticsRepo::track(&state.pool, page, today).await {
        tracing::warn!(error = %e, page, "Failed to record page view");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/admin/analytics/stats
///
/// Concurrent fan-out over independent aggregation queries. Each branch is
/// caught on its own: a failing table logs once and contributes its zero
/// default instead of blanking the whole dashboard.
pub async fn stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<StatsResponse> {
    let pool = &state.pool;

    let (views, revenue, posts, products, orders, subscribers, unread) = tokio::join!(
        DashboardRepo::total_views(pool),
        DashboardRepo::total_revenue(pool),
        DashboardRepo::total_posts(pool),
        DashboardRepo::total_products(pool),
        DashboardRepo::total_orders(pool),
        DashboardRepo::total_subscribers(pool),
        DashboardRepo::unread_messages(pool),
    );

    Json(StatsResponse {
        total_views: branch_or_default(views, "total_views"),
        total_revenue: branch_or_default(revenue, "total_revenue"),
        total_posts: branch_or_default(posts, "total_posts"),
        total_products: branch_or_default(products, "total_products"),
        total_orders: branch_or_default(orders, "total_orders"),
        total_subscribers: branch_or_default(subscribers, "total_subscribers"),
        unread_messages: branch_or_default(unread, "unread_messages"),
    })
}

/// GET /api/v1/admin/analytics/page-views?days=N
///
/// Per-page daily counters for the last N days (default 30, capped at
/// 365), oldest first. Rows are returned raw; bucketing by date is the
/// charting caller's concern.
pub async fn page_views(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DaysParams>,
) -> AppResult<Json<Vec<AnalyticsRecord>>> {
    let days = params.days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);
    let since = Utc::now().date_naive() - Duration::days(days);

    let series = AnalyticsRepo::list_since(&state.pool, since).await?;
    Ok(Json(series))
}

/// Unwrap one aggregation branch, logging and defaulting on failure.
fn branch_or_default<T: Default>(result: Result<T, sqlx::Error>, branch: &'static str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, branch, "Stats branch failed; defaulting to zero");
            T::default()
        }
    }
}
