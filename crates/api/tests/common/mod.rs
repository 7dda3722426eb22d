//! Shared test harness for the HTTP-level integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! `main.rs` so tests exercise what production runs. Not every test
//! binary uses every helper.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use folio_api::auth::jwt::JwtConfig;
use folio_api::auth::password::hash_password;
use folio_api::config::ServerConfig;
use folio_api::routes;
use folio_api::state::AppState;
use folio_api::storage::{LocalObjectStore, ObjectStore};
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

/// Create a unique on-disk root for one test app, with a static shell the
/// page routes can serve.
pub fn test_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("folio-api-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(root.join("public")).expect("test root should be creatable");
    std::fs::create_dir_all(root.join("media")).expect("media root should be creatable");
    std::fs::write(
        root.join("public").join("index.html"),
        "<!doctype html><div id=\"folio-shell\"></div>",
    )
    .expect("shell should be writable");
    root
}

/// Build a test `ServerConfig` rooted at `root`.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root: root.join("media"),
        static_root: root.join("public"),
        public_base_url: "http://localhost:3000".to_string(),
        admin_emails: vec!["owner@example.com".to_string()],
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with the default local object store.
pub async fn build_test_app(pool: PgPool) -> Router {
    let root = test_root();
    let config = test_config(&root);
    let store = Arc::new(LocalObjectStore::new(
        config.media_root.clone(),
        config.public_base_url.clone(),
    ));
    build_app(pool, config, store)
}

/// Build the application router with a caller-provided object store.
///
/// Used by the media tests to inject a failing store.
pub async fn build_test_app_with_store(pool: PgPool, store: Arc<dyn ObjectStore>) -> Router {
    let root = test_root();
    let config = test_config(&root);
    build_app(pool, config, store)
}

/// Mirror the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
fn build_app(pool: PgPool, config: ServerConfig, store: Arc<dyn ObjectStore>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
        store,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .merge(routes::pages::router(state.clone()))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database, returning the row and the
/// plaintext password used.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    role: &str,
) -> (folio_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the JSON body (`access_token`,
/// `refresh_token`, `user`).
pub async fn login(app: Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Create an admin user and return `(user, access_token)` ready for
/// authenticated requests.
pub async fn admin_token(pool: &PgPool, app: Router) -> (folio_db::models::user::User, String) {
    let (user, password) = create_user(pool, "admin@example.com", "admin").await;
    let json = login(app, "admin@example.com", &password).await;
    let token = json["access_token"].as_str().unwrap().to_string();
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}
