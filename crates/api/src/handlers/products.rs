//! Handlers for store products: public catalogue and admin CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::product::{CreateProduct, Product, UpdateProduct};
use folio_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Reject negative prices before they reach the database constraint.
fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Price must be a non-negative number, got {price}"
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// GET /api/v1/products
///
/// Degrades to an empty list on a database failure.
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = match ProductRepo::list(&state.pool).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list products");
            Vec::new()
        }
    };
    Json(products)
}

/// GET /api/v1/products/{slug}
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Product", slug)))?;
    Ok(Json(product))
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/products
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// POST /api/v1/admin/products
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_price(input.price)?;
    if !folio_core::slug::is_valid_slug(&input.slug) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid slug '{}': use lowercase letters, digits, and single hyphens",
            input.slug
        ))));
    }

    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/admin/products/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    if let Some(price) = input.price {
        validate_price(price)?;
    }

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Product", id)))?;
    Ok(Json(product))
}

/// DELETE /api/v1/admin/products/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProductRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Product", id)))
    }
}
