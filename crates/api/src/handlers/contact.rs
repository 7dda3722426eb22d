//! Handlers for contact messages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact_message::{ContactMessage, CreateContactMessage};
use folio_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/contact -- public contact form submission.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message must not be empty".into(),
        )));
    }
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email is required".into(),
        )));
    }

    let message = ContactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/admin/messages
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// POST /api/v1/admin/messages/{id}/read
pub async fn mark_read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContactRepo::mark_read(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Message", id)))
    }
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContactRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Message", id)))
    }
}
