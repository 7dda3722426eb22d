//! Site setting entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A site setting row from the `site_settings` table.
///
/// Settings are an upsert-only key/value store; there is no delete
/// operation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}

/// DTO for upserting a site setting.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSiteSetting {
    pub key: String,
    pub value: serde_json::Value,
}
