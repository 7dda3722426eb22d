//! Media entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A media row from the `media` table.
///
/// `filename` is the object key in the backing store; `url` is the public
/// URL derived from it at upload time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub filename: String,
    pub url: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new media row after a successful object upload.
#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub filename: String,
    pub url: String,
    pub content_type: String,
    pub size_bytes: i64,
}
