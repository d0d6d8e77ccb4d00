//! Dashboard routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::routes::auth::AuthUser;
use crate::services::dashboard::{self, DashboardView};
use crate::state::AppState;

/// `GET /api/dashboard` — garden-wide stats and recent activity.
pub async fn dashboard(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<DashboardView>, StatusCode> {
    let view = dashboard::view(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "dashboard query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(view))
}
