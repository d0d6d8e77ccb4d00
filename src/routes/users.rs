//! Member management routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::profile::{self, ProfileRow, ProfileStats, Role};
use crate::state::AppState;

pub(crate) fn profile_error_to_status(err: &profile::ProfileError) -> StatusCode {
    match err {
        profile::ProfileError::NotFound(_) => StatusCode::NOT_FOUND,
        profile::ProfileError::Forbidden => StatusCode::FORBIDDEN,
        profile::ProfileError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

/// `GET /api/users` — list members, optionally filtered by role.
///
/// Open to all signed-in members: the plot and task forms need the gardener
/// list for their assignment dropdowns.
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<ProfileRow>>, StatusCode> {
    let role = match query.role.as_deref() {
        Some(raw) => Some(Role::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };

    let rows = profile::list_profiles(&state.pool, role)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(rows))
}

#[derive(serde::Serialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub profile: ProfileRow,
    pub stats: ProfileStats,
}

/// `GET /api/users/:id` — one member with aggregate stats.
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, StatusCode> {
    let row = profile::get_profile(&state.pool, user_id)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    let stats = profile::profile_stats(&state.pool, user_id)
        .await
        .map_err(|e| profile_error_to_status(&e))?;

    Ok(Json(UserDetailResponse { profile: row, stats }))
}

#[derive(Deserialize)]
pub struct UpdateUserBody {
    pub full_name: Option<String>,
    pub role: Option<String>,
}

/// `PATCH /api/users/:id` — rename a member or change their role.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<ProfileRow>, StatusCode> {
    let role = match body.role.as_deref() {
        Some(raw) => Some(Role::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };

    let row = profile::update_profile(&state.pool, &auth.user, user_id, body.full_name.as_deref(), role)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(row))
}

/// `DELETE /api/users/:id` — remove a member.
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    profile::delete_profile(&state.pool, &auth.user, user_id)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
