pub mod admin;
pub mod auth;
pub mod content;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         session rehydration (identity or null)
///
/// /posts                           published posts (GET)
/// /posts/{slug}                    post detail, slug-or-id (GET)
/// /posts/{id}/views                record a view by post id (POST)
/// /products                        product catalogue (GET)
/// /products/{slug}                 product detail (GET)
/// /projects                        project listing, ?category= (GET)
/// /orders                          create order (POST)
/// /contact                         contact form (POST)
/// /subscribe                       newsletter signup (POST)
/// /settings/{key}                  public setting value (GET)
/// /track                           record page view (POST)
///
/// /admin/posts                     list, create (admin only)
/// /admin/posts/{id}                update, delete
/// /admin/products                  list, create
/// /admin/products/{id}             update, delete
/// /admin/projects                  list, create
/// /admin/projects/{id}             update, delete
/// /admin/orders                    list with products
/// /admin/orders/{id}               delete
/// /admin/orders/{id}/status        update status (PUT)
/// /admin/messages                  list
/// /admin/messages/{id}             delete
/// /admin/messages/{id}/read        mark read (POST)
/// /admin/subscribers               list
/// /admin/subscribers/export        CSV of active subscribers (GET)
/// /admin/subscribers/{id}          toggle (PUT), delete
/// /admin/media                     list, upload (multipart POST)
/// /admin/media/{id}                delete (object first, then row)
/// /admin/settings                  list (GET), upsert (PUT)
/// /admin/analytics/stats           dashboard counters (GET)
/// /admin/analytics/page-views      daily view series, ?days= (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(content::router())
        .nest("/admin", admin::router())
}
