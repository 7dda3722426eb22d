//! Repository for the `media` table.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::media::{CreateMedia, Media};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, filename, url, content_type, size_bytes, created_at";

/// Provides CRUD operations for media rows.
///
/// The backing object lifecycle (store/remove) is owned by the API layer;
/// this repository only tracks the rows.
pub struct MediaRepo;

impl MediaRepo {
    /// List all media, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media ORDER BY created_at DESC");
        sqlx::query_as::<_, Media>(&query).fetch_all(pool).await
    }

    /// Find a media row by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new media row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (filename, url, content_type, size_bytes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.filename)
            .bind(&input.url)
            .bind(&input.content_type)
            .bind(input.size_bytes)
            .fetch_one(pool)
            .await
    }

    /// Delete a media row by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
