//! Integration tests for the media library: multipart upload and the
//! object-before-row delete ordering.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, delete_auth, get_auth};
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::storage::{ObjectStore, StorageError};
use folio_db::models::media::CreateMedia;
use folio_db::repositories::MediaRepo;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// An object store whose `remove` always fails, for exercising the
/// fail-closed delete ordering.
struct RemoveFailsStore;

#[async_trait]
impl ObjectStore for RemoveFailsStore {
    async fn put(&self, _key: &str, _bytes: &[u8]) -> Result<(), StorageError> {
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("bucket unreachable"),
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://localhost:3000/media/{key}")
    }
}

/// Build a multipart upload request with a single `file` field.
fn multipart_upload(uri: &str, token: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "folio-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

/// Upload stores the object, derives the public URL, and inserts the row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_round_trip(pool: PgPool) {
    let (_admin, token) = common::admin_token(&pool, common::build_test_app(pool.clone()).await).await;

    let app = common::build_test_app(pool.clone()).await;
    let request = multipart_upload(
        "/api/v1/admin/media",
        &token,
        "street shot.png",
        b"not-a-real-png",
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let filename = json["filename"].as_str().unwrap();
    assert!(
        filename.ends_with("-street-shot.png"),
        "whitespace must be sanitized in the object key, got {filename}"
    );
    assert_eq!(json["content_type"], "image/png");
    assert_eq!(json["size_bytes"], 14);
    assert_eq!(
        json["url"],
        format!("http://localhost:3000/media/{filename}")
    );

    // The row is visible in the listing.
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/admin/media", &token).await;
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

/// A multipart body without a `file` field is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_requires_file_field(pool: PgPool) {
    let (_admin, token) = common::admin_token(&pool, common::build_test_app(pool.clone()).await).await;

    let boundary = "folio-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/media")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();

    let app = common::build_test_app(pool).await;
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete ordering
// ---------------------------------------------------------------------------

/// When object removal fails, the delete fails closed: the row must
/// remain so the library never references a state it cannot see.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_failed_object_removal_keeps_the_row(pool: PgPool) {
    let (_admin, token) = common::admin_token(&pool, common::build_test_app(pool.clone()).await).await;

    let media = MediaRepo::create(
        &pool,
        &CreateMedia {
            filename: "1717243800000-roof.jpg".to_string(),
            url: "http://localhost:3000/media/1717243800000-roof.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes: 9000,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app_with_store(pool.clone(), Arc::new(RemoveFailsStore)).await;
    let response = delete_auth(app, &format!("/api/v1/admin/media/{}", media.id), &token).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Fail closed: the row is still there.
    let row = MediaRepo::find_by_id(&pool, media.id).await.unwrap();
    assert!(row.is_some(), "row must remain after failed object removal");
}

/// Successful delete removes the object, then the row. The same app (and
/// therefore the same store root) serves both requests.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_removes_object_then_row(pool: PgPool) {
    let (_admin, token) = common::admin_token(&pool, common::build_test_app(pool.clone()).await).await;

    let app = common::build_test_app(pool.clone()).await;

    // Upload through the API so the object really exists on disk.
    let request = multipart_upload("/api/v1/admin/media", &token, "gone.png", b"payload");
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id: uuid::Uuid = json["id"].as_str().unwrap().parse().unwrap();

    let response = delete_auth(app, &format!("/api/v1/admin/media/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(MediaRepo::find_by_id(&pool, id).await.unwrap().is_none());
}
