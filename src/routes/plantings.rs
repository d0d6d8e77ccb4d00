//! Planting record routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::planting::{self, PlantingRow, PlantingStatus};
use crate::state::AppState;

pub(crate) fn planting_error_to_status(err: &planting::PlantingError) -> StatusCode {
    match err {
        planting::PlantingError::NotFound(_)
        | planting::PlantingError::PlotNotFound(_)
        | planting::PlantingError::PlantNotFound(_) => StatusCode::NOT_FOUND,
        planting::PlantingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/plantings` — list all planting records.
pub async fn list_plantings(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<PlantingRow>>, StatusCode> {
    let rows = planting::list_plantings(&state.pool)
        .await
        .map_err(|e| planting_error_to_status(&e))?;
    Ok(Json(rows))
}

/// `GET /api/plantings/:id` — fetch one planting.
pub async fn get_planting(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(planting_id): Path<Uuid>,
) -> Result<Json<PlantingRow>, StatusCode> {
    let row = planting::get_planting(&state.pool, planting_id)
        .await
        .map_err(|e| planting_error_to_status(&e))?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct CreatePlantingBody {
    pub plot_id: Uuid,
    pub plant_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub planted_date: Date,
    /// Defaults to `planted_date` + the plant's harvest time.
    pub expected_harvest_date: Option<Date>,
    pub notes: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

/// `POST /api/plantings` — record a planting.
pub async fn create_planting(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(body): Json<CreatePlantingBody>,
) -> Result<(StatusCode, Json<PlantingRow>), StatusCode> {
    if body.quantity <= 0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = planting::create_planting(
        &state.pool,
        body.plot_id,
        body.plant_id,
        body.quantity,
        body.planted_date,
        body.expected_harvest_date,
        body.notes.as_deref(),
    )
    .await
    .map_err(|e| planting_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct UpdatePlantingBody {
    pub status: Option<String>,
    pub quantity: Option<i32>,
    pub planted_date: Option<Date>,
    pub expected_harvest_date: Option<Date>,
    pub notes: Option<String>,
}

/// `PATCH /api/plantings/:id` — update a planting.
pub async fn update_planting(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(planting_id): Path<Uuid>,
    Json(body): Json<UpdatePlantingBody>,
) -> Result<Json<PlantingRow>, StatusCode> {
    let status = match body.status.as_deref() {
        Some(raw) => Some(PlantingStatus::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };
    if body.quantity.is_some_and(|q| q <= 0) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = planting::update_planting(
        &state.pool,
        planting_id,
        status,
        body.quantity,
        body.planted_date,
        body.expected_harvest_date,
        body.notes.as_deref(),
    )
    .await
    .map_err(|e| planting_error_to_status(&e))?;
    Ok(Json(row))
}

/// `DELETE /api/plantings/:id` — delete a planting.
pub async fn delete_planting(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(planting_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    planting::delete_planting(&state.pool, planting_id)
        .await
        .map_err(|e| planting_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "plantings_test.rs"]
mod tests;
