//! Route definitions for the admin API subtree.
//!
//! Every handler mounted here takes a
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin) extractor, so
//! the role check is enforced per handler rather than per layer; these
//! routes answer 401/403 JSON, never redirects.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    analytics, contact, media, orders, posts, products, projects, settings, subscribers,
};
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_admin).post(posts::create))
        .route("/posts/{id}", put(posts::update).delete(posts::delete))
        .route(
            "/products",
            get(products::list_admin).post(products::create),
        )
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route(
            "/projects",
            get(projects::list_admin).post(projects::create),
        )
        .route(
            "/projects/{id}",
            put(projects::update).delete(projects::delete),
        )
        .route("/orders", get(orders::list_admin))
        .route("/orders/{id}", axum::routing::delete(orders::delete))
        .route("/orders/{id}/status", put(orders::update_status))
        .route("/messages", get(contact::list_admin))
        .route("/messages/{id}", axum::routing::delete(contact::delete))
        .route("/messages/{id}/read", post(contact::mark_read))
        .route("/subscribers", get(subscribers::list_admin))
        .route("/subscribers/export", get(subscribers::export_csv))
        .route(
            "/subscribers/{id}",
            put(subscribers::toggle).delete(subscribers::delete),
        )
        .route("/media", get(media::list_admin).post(media::upload))
        .route("/media/{id}", axum::routing::delete(media::delete))
        .route(
            "/settings",
            get(settings::list_admin).put(settings::upsert),
        )
        .route("/analytics/stats", get(analytics::stats))
        .route("/analytics/page-views", get(analytics::page_views))
}
