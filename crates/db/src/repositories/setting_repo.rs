//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::site_setting::{SiteSetting, UpsertSiteSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, key, value, updated_at";

/// Provides operations for site settings.
///
/// Settings are upsert-only; there is deliberately no delete.
pub struct SettingRepo;

impl SettingRepo {
    /// List all settings ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings ORDER BY key");
        sqlx::query_as::<_, SiteSetting>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch a single setting by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE key = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a setting's value, returning the stored row.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertSiteSetting,
    ) -> Result<SiteSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (key, value)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_site_settings_key
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .fetch_one(pool)
            .await
    }
}
