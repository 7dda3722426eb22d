//! Handlers for newsletter subscribers, including the CSV export.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use serde::Deserialize;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::subscriber::{CreateSubscriber, Subscriber};
use folio_db::repositories::SubscriberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /admin/subscribers/{id}`.
#[derive(Debug, Deserialize)]
pub struct ToggleSubscription {
    pub subscribed: bool,
}

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// POST /api/v1/subscribe
///
/// A duplicate email reactivates the existing subscription instead of
/// erroring.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<CreateSubscriber>,
) -> AppResult<(StatusCode, Json<Subscriber>)> {
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email is required".into(),
        )));
    }

    let subscriber = SubscriberRepo::subscribe(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(subscriber)))
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/subscribers -- active and unsubscribed alike.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Subscriber>>> {
    let subscribers = SubscriberRepo::list(&state.pool).await?;
    Ok(Json(subscribers))
}

/// PUT /api/v1/admin/subscribers/{id} -- toggle the subscribed flag.
pub async fn toggle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ToggleSubscription>,
) -> AppResult<Json<Subscriber>> {
    let subscriber = SubscriberRepo::set_subscribed(&state.pool, id, input.subscribed)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Subscriber", id)))?;
    Ok(Json(subscriber))
}

/// DELETE /api/v1/admin/subscribers/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SubscriberRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Subscriber", id)))
    }
}

/// GET /api/v1/admin/subscribers/export
///
/// CSV of ACTIVE subscribers only (`subscribed = true`), served as a
/// dated attachment.
pub async fn export_csv(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let subscribers = SubscriberRepo::list(&state.pool).await?;
    let csv = subscribers_csv(&subscribers);

    let filename = format!(
        "subscribers-{}.csv",
        chrono::Utc::now().date_naive().format("%Y-%m-%d")
    );

    Ok((
        AppendHeaders([
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ]),
        csv,
    ))
}

/// Build the export CSV: header row plus one row per active subscriber.
fn subscribers_csv(subscribers: &[Subscriber]) -> String {
    let mut csv = String::from("Email,Name,Subscribed Date\n");
    for sub in subscribers.iter().filter(|s| s.subscribed) {
        csv.push_str(&csv_field(&sub.email));
        csv.push(',');
        csv.push_str(&csv_field(sub.name.as_deref().unwrap_or("")));
        csv.push(',');
        csv.push_str(&sub.created_at.format("%Y-%m-%d").to_string());
        csv.push('\n');
    }
    csv
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn subscriber(email: &str, name: Option<&str>, subscribed: bool) -> Subscriber {
        Subscriber {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.map(String::from),
            subscribed,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn export_includes_only_active_subscribers() {
        let subs = vec![
            subscriber("a@example.com", Some("Ada"), true),
            subscriber("b@example.com", None, false),
            subscriber("c@example.com", Some("Cy"), true),
        ];

        let csv = subscribers_csv(&subs);
        let lines: Vec<&str> = csv.lines().collect();

        // Header + exactly the two active rows, regardless of total count.
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Email,Name,Subscribed Date");
        assert_eq!(lines[1], "a@example.com,Ada,2024-06-01");
        assert_eq!(lines[2], "c@example.com,Cy,2024-06-01");
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let subs = vec![subscriber("d@example.com", Some("Doe, Jane \"DJ\""), true)];
        let csv = subscribers_csv(&subs);
        assert!(csv.contains("\"Doe, Jane \"\"DJ\"\"\""));
    }

    #[test]
    fn no_active_subscribers_yields_header_only() {
        let subs = vec![subscriber("x@example.com", None, false)];
        assert_eq!(subscribers_csv(&subs), "Email,Name,Subscribed Date\n");
    }
}
