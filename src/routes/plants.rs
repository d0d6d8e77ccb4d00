//! Plant catalog routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::plant::{self, PlantInput, PlantRow};
use crate::state::AppState;

pub(crate) fn plant_error_to_status(err: &plant::PlantError) -> StatusCode {
    match err {
        plant::PlantError::NotFound(_) => StatusCode::NOT_FOUND,
        plant::PlantError::Forbidden => StatusCode::FORBIDDEN,
        plant::PlantError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/plants` — list the catalog.
pub async fn list_plants(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<PlantRow>>, StatusCode> {
    let rows = plant::list_plants(&state.pool)
        .await
        .map_err(|e| plant_error_to_status(&e))?;
    Ok(Json(rows))
}

/// `GET /api/plants/:id` — fetch one catalog entry.
pub async fn get_plant(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(plant_id): Path<Uuid>,
) -> Result<Json<PlantRow>, StatusCode> {
    let row = plant::get_plant(&state.pool, plant_id)
        .await
        .map_err(|e| plant_error_to_status(&e))?;
    Ok(Json(row))
}

/// `POST /api/plants` — add a plant to the catalog. Admin-only.
pub async fn create_plant(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<PlantInput>,
) -> Result<(StatusCode, Json<PlantRow>), StatusCode> {
    if body.name.trim().is_empty() || body.harvest_time < 0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = plant::create_plant(&state.pool, &auth.user, &body)
        .await
        .map_err(|e| plant_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PATCH /api/plants/:id` — replace a catalog entry. Admin-only.
pub async fn update_plant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plant_id): Path<Uuid>,
    Json(body): Json<PlantInput>,
) -> Result<Json<PlantRow>, StatusCode> {
    if body.name.trim().is_empty() || body.harvest_time < 0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = plant::update_plant(&state.pool, &auth.user, plant_id, &body)
        .await
        .map_err(|e| plant_error_to_status(&e))?;
    Ok(Json(row))
}

/// `DELETE /api/plants/:id` — remove a catalog entry. Admin-only.
pub async fn delete_plant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plant_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    plant::delete_plant(&state.pool, &auth.user, plant_id)
        .await
        .map_err(|e| plant_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "plants_test.rs"]
mod tests;
