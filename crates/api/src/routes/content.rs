//! Route definitions for the public content surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analytics, contact, orders, posts, products, projects, settings, subscribers};
use crate::state::AppState;

/// Public routes mounted directly under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_public))
        .route("/posts/{slug}", get(posts::get_public))
        .route("/posts/{slug}/views", post(posts::record_view))
        .route("/products", get(products::list_public))
        .route("/products/{slug}", get(products::get_public))
        .route("/projects", get(projects::list_public))
        .route("/orders", post(orders::create))
        .route("/contact", post(contact::create))
        .route("/subscribe", post(subscribers::subscribe))
        .route("/settings/{key}", get(settings::get_public))
        .route("/track", post(analytics::track))
}
