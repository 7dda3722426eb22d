//! Handlers for the media library: multipart upload and ordered delete.
//!
//! Deletion removes the stored object BEFORE the database row. If object
//! removal fails, the row delete must not run (fail closed, both still
//! present); if the row delete fails after removal, the orphan row is the
//! defined degraded state and the failure surfaces to the caller.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::media::{CreateMedia, Media};
use folio_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;
use crate::storage::object_key;

/// GET /api/v1/admin/media -- newest first.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Media>>> {
    let media = MediaRepo::list(&state.pool).await?;
    Ok(Json(media))
}

/// POST /api/v1/admin/media
///
/// Multipart upload: the first `file` field is stored under a
/// timestamp-prefixed key, then a row referencing its public URL is
/// inserted. Upload and insert are sequenced explicitly; there is no
/// transaction spanning the store and the database.
pub async fn upload(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Media>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("File field is missing a filename".into()))?;
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload body: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".into()));
        }

        let key = object_key(&original_name);
        state.store.put(&key, &bytes).await?;

        let input = CreateMedia {
            filename: key.clone(),
            url: state.store.public_url(&key),
            content_type,
            size_bytes: bytes.len() as i64,
        };
        let media = MediaRepo::create(&state.pool, &input).await?;

        tracing::info!(media_id = %media.id, key = %key, size = media.size_bytes, "Media uploaded");
        return Ok((StatusCode::CREATED, Json(media)));
    }

    Err(AppError::BadRequest(
        "Multipart body must contain a 'file' field".into(),
    ))
}

/// DELETE /api/v1/admin/media/{id}
///
/// Object first, then row -- see the module docs for the ordering
/// contract.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Media", id)))?;

    state.store.remove(&media.filename).await?;

    if MediaRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        // The object is gone but the row vanished from under us too;
        // treat as already deleted.
        Ok(StatusCode::NO_CONTENT)
    }
}
