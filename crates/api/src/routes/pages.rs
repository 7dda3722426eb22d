//! Page routes: the static frontend shell and uploaded media.
//!
//! The public site (home, blog, store, work, about, login) is a SPA served
//! from `static_root` with an index-html fallback so client-side routes
//! deep-link correctly. The `/admin` subtree is the protected area: it
//! passes through [`admin_page_guard`] before anything is served, and
//! unauthenticated navigations are redirected to `/login?from=...`.

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::middleware::guard::admin_page_guard;
use crate::state::AppState;

/// Build the page router: `/media`, `/admin` (guarded), and the SPA
/// fallback for every other path.
pub fn router(state: AppState) -> Router<AppState> {
    let static_root = &state.config.static_root;
    let index = ServeFile::new(static_root.join("index.html"));

    // The whole SPA shell is one index.html; the admin subtree serves the
    // same shell but only past the guard.
    let admin_shell = ServeFile::new(static_root.join("index.html"));
    let admin_routes: Router = Router::new()
        .fallback_service(admin_shell)
        .layer(from_fn_with_state(state.clone(), admin_page_guard));

    Router::new()
        .nest_service("/media", ServeDir::new(state.config.media_root.clone()))
        .nest_service("/admin", admin_routes)
        .fallback_service(ServeDir::new(static_root.clone()).fallback(index))
}
