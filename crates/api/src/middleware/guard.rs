//! Route guard for the admin page subtree.
//!
//! Browser navigations to `/admin/...` pass through here before the static
//! shell is served. The guard checks for the presence of a valid identity
//! only; the finer admin-role check belongs to the API layer
//! ([`RequireAdmin`](crate::middleware::rbac::RequireAdmin)), which every
//! admin data route enforces regardless of how the shell was reached.

use axum::extract::{Request, State};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::jwt::validate_token;
use crate::middleware::auth::token_from_headers;
use crate::state::AppState;

/// Gate a page request on the presence of a valid identity.
///
/// - Identity present: the protected subtree renders.
/// - Identity absent: 303 See Other to `/login?from=<requested path>`.
///   303 replaces the protected URL in history (the back button does not
///   return to the guarded page), and `from` preserves the destination
///   for post-login redirect.
pub async fn admin_page_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let identity = token_from_headers(request.headers())
        .and_then(|token| validate_token(token, &state.config.jwt).ok());

    match identity {
        Some(_) => next.run(request).await,
        None => Redirect::to(&login_redirect_target(request.uri())).into_response(),
    }
}

/// Build the `/login?from=...` redirect target for a guarded URI.
fn login_redirect_target(uri: &Uri) -> String {
    let requested = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/admin");
    format!("/login?from={}", percent_encode(requested))
}

/// Percent-encode a path for embedding in a query parameter value.
///
/// Keeps unreserved characters and `/` readable; everything else (notably
/// `?`, `&`, `#`, `%`, spaces) is escaped so the `from` value survives a
/// round-trip through the login page.
fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
