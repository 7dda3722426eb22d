//! Handlers for site settings (upsert-only key/value store).

use axum::extract::{Path, State};
use axum::Json;

use folio_db::models::site_setting::{SiteSetting, UpsertSiteSetting};
use folio_db::repositories::SettingRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings/{key}
///
/// Public read of a single setting's value. A missing key is `data: null`,
/// not an error, and a database failure degrades the same way.
pub async fn get_public(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DataResponse<Option<serde_json::Value>>> {
    let value = match SettingRepo::get(&state.pool, &key).await {
        Ok(setting) => setting.map(|s| s.value),
        Err(e) => {
            tracing::error!(error = %e, key = %key, "Failed to read site setting");
            None
        }
    };
    Json(DataResponse { data: value })
}

/// GET /api/v1/admin/settings -- all settings ordered by key.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SiteSetting>>> {
    let settings = SettingRepo::list(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/v1/admin/settings
///
/// Insert or replace a setting by key. There is deliberately no delete.
pub async fn upsert(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertSiteSetting>,
) -> AppResult<Json<SiteSetting>> {
    let setting = SettingRepo::upsert(&state.pool, &input).await?;
    Ok(Json(setting))
}
