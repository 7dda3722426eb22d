//! Handlers for blog posts: public feed, dual-mode detail lookup, view
//! counting, and the admin CRUD surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use folio_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// GET /api/v1/posts
///
/// Published posts, newest first. Degrades to an empty list on a database
/// failure so the public feed renders "nothing found" instead of erroring.
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    let posts = match PostRepo::list_published(&state.pool).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list published posts");
            Vec::new()
        }
    };
    Json(posts)
}

/// GET /api/v1/posts/{slug}
///
/// Dual-mode lookup: the path segment is tried as a slug first, then as a
/// raw UUID, so legacy id-based links keep resolving. Only published
/// posts are visible here.
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    if let Some(post) = PostRepo::find_published_by_slug(&state.pool, &slug).await? {
        return Ok(Json(post));
    }

    if let Ok(id) = slug.parse::<Uuid>() {
        if let Some(post) = PostRepo::find_published_by_id(&state.pool, id).await? {
            return Ok(Json(post));
        }
    }

    Err(AppError::Core(CoreError::not_found("Post", slug)))
}

/// POST /api/v1/posts/{id}/views
///
/// Record one view; the path segment is the post id. The increment is
/// atomic in the database; a missing post is a 404 so broken links
/// surface during development.
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PostRepo::increment_views(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Post", id)))
    }
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/posts -- all posts, drafts included.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = PostRepo::list_all(&state.pool).await?;
    Ok(Json(posts))
}

/// POST /api/v1/admin/posts
///
/// A blank slug is derived from the title. New posts default to
/// unpublished.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let slug = super::resolve_slug(input.slug.as_deref(), &input.title)?;
    let post = PostRepo::create(&state.pool, &slug, &input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/v1/admin/posts/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    if let Some(slug) = input.slug.as_deref() {
        if !folio_core::slug::is_valid_slug(slug) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid slug '{slug}': use lowercase letters, digits, and single hyphens"
            ))));
        }
    }

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;
    Ok(Json(post))
}

/// DELETE /api/v1/admin/posts/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PostRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Post", id)))
    }
}
