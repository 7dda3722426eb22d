//! Handlers for store orders.
//!
//! Orders are intent records -- there is no payment processing. The public
//! surface creates them; the admin surface walks them through the status
//! chain.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::order::{CreateOrder, Order, OrderWithProduct};
use folio_db::models::status::OrderStatus;
use folio_db::repositories::{OrderRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /admin/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: OrderStatus,
}

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// POST /api/v1/orders
///
/// Create a pending order for an existing product.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    if !input.amount.is_finite() || input.amount < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Order amount must be a non-negative number".into(),
        )));
    }
    if !input.customer_email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid customer email is required".into(),
        )));
    }

    // The referenced product must exist; a dangling reference would only
    // surface later as an FK error with a worse message.
    ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Product", input.product_id)))?;

    let order = OrderRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/orders -- newest first, each joined with its product.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<OrderWithProduct>>> {
    let orders = OrderRepo::list_with_products(&state.pool).await?;
    Ok(Json(orders))
}

/// PUT /api/v1/admin/orders/{id}/status
///
/// Transitions are validated against the status chain; anything else is a
/// 400 naming both states.
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Order", id)))?;

    if !order.status.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Cannot move order from {:?} to {:?}",
            order.status, input.status
        ))));
    }

    let updated = OrderRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Order", id)))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/admin/orders/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if OrderRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Order", id)))
    }
}
