//! Garden plot routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::plot::{self, PlotRow};
use crate::state::AppState;

pub(crate) fn plot_error_to_status(err: &plot::PlotError) -> StatusCode {
    match err {
        plot::PlotError::NotFound(_) => StatusCode::NOT_FOUND,
        plot::PlotError::Forbidden => StatusCode::FORBIDDEN,
        plot::PlotError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/plots` — list all plots with their assignees.
pub async fn list_plots(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<PlotRow>>, StatusCode> {
    let rows = plot::list_plots(&state.pool)
        .await
        .map_err(|e| plot_error_to_status(&e))?;
    Ok(Json(rows))
}

/// `GET /api/plots/:id` — fetch one plot.
pub async fn get_plot(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(plot_id): Path<Uuid>,
) -> Result<Json<PlotRow>, StatusCode> {
    let row = plot::get_plot(&state.pool, plot_id)
        .await
        .map_err(|e| plot_error_to_status(&e))?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct CreatePlotBody {
    pub location: String,
    pub size: String,
    pub assigned_user_id: Option<Uuid>,
}

/// `POST /api/plots` — create a plot. Admin-only.
pub async fn create_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreatePlotBody>,
) -> Result<(StatusCode, Json<PlotRow>), StatusCode> {
    if body.location.trim().is_empty() || body.size.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = plot::create_plot(&state.pool, &auth.user, &body.location, &body.size, body.assigned_user_id)
        .await
        .map_err(|e| plot_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct UpdatePlotBody {
    pub location: Option<String>,
    pub size: Option<String>,
    /// Absent leaves assignment untouched; explicit `null` clears it.
    #[serde(default, with = "double_option")]
    pub assigned_user_id: Option<Option<Uuid>>,
}

/// Distinguishes an absent JSON field from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// `PATCH /api/plots/:id` — update plot fields. Admin-only.
pub async fn update_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plot_id): Path<Uuid>,
    Json(body): Json<UpdatePlotBody>,
) -> Result<Json<PlotRow>, StatusCode> {
    let row = plot::update_plot(
        &state.pool,
        &auth.user,
        plot_id,
        body.location.as_deref(),
        body.size.as_deref(),
        body.assigned_user_id,
    )
    .await
    .map_err(|e| plot_error_to_status(&e))?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct AssignPlotBody {
    /// `null` unassigns the plot.
    pub user_id: Option<Uuid>,
}

/// `POST /api/plots/:id/assign` — assign or unassign a gardener. Admin-only.
pub async fn assign_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plot_id): Path<Uuid>,
    Json(body): Json<AssignPlotBody>,
) -> Result<Json<PlotRow>, StatusCode> {
    let row = plot::assign_plot(&state.pool, &auth.user, plot_id, body.user_id)
        .await
        .map_err(|e| plot_error_to_status(&e))?;
    Ok(Json(row))
}

/// `DELETE /api/plots/:id` — delete a plot. Admin-only.
pub async fn delete_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plot_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    plot::delete_plot(&state.pool, &auth.user, plot_id)
        .await
        .map_err(|e| plot_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "plots_test.rs"]
mod tests;
