//! Handlers for portfolio projects: public listing and admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::CategoryParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// GET /api/v1/projects?category=
///
/// Degrades to an empty list on a database failure.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Json<Vec<Project>> {
    let projects = match ProjectRepo::list(&state.pool, params.category.as_deref()).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list projects");
            Vec::new()
        }
    };
    Json(projects)
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects?category=
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(projects))
}

/// POST /api/v1/admin/projects
///
/// A blank slug is derived from the title.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let slug = super::resolve_slug(input.slug.as_deref(), &input.title)?;
    let project = ProjectRepo::create(&state.pool, &slug, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Project", id)))
    }
}
