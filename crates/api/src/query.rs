//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?category=` filter, used by the project listings.
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

/// `?days=` window for the analytics time series. Defaults to 30 days,
/// clamped in the handler.
#[derive(Debug, Deserialize)]
pub struct DaysParams {
    pub days: Option<i64>,
}
