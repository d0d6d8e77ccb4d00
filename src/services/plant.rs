//! Plant catalog service.
//!
//! The catalog holds the species the garden grows. `harvest_time` is the
//! number of days from planting to expected harvest and feeds the default
//! harvest date when a planting is recorded.

use sqlx::PgPool;
use uuid::Uuid;

use crate::services::profile::{ProfileRow, Role};

#[derive(Debug, thiserror::Error)]
pub enum PlantError {
    #[error("plant not found: {0}")]
    NotFound(Uuid),
    #[error("operation requires admin role")]
    Forbidden,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from catalog queries.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlantRow {
    pub id: Uuid,
    pub name: String,
    pub scientific_name: String,
    pub planting_season: String,
    pub harvest_time: i32,
    pub description: String,
    pub care_instructions: String,
}

/// Fields accepted when creating or updating a catalog entry.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlantInput {
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    pub planting_season: String,
    pub harvest_time: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub care_instructions: String,
}

fn ensure_admin(caller: &ProfileRow) -> Result<(), PlantError> {
    if caller.role == Role::Admin {
        Ok(())
    } else {
        Err(PlantError::Forbidden)
    }
}

type PlantTuple = (Uuid, String, String, String, i32, String, String);

fn to_row((id, name, scientific_name, planting_season, harvest_time, description, care_instructions): PlantTuple) -> PlantRow {
    PlantRow { id, name, scientific_name, planting_season, harvest_time, description, care_instructions }
}

/// List the catalog ordered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_plants(pool: &PgPool) -> Result<Vec<PlantRow>, PlantError> {
    let rows = sqlx::query_as::<_, PlantTuple>(
        "SELECT id, name, scientific_name, planting_season, harvest_time, description, care_instructions
         FROM plants ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(to_row).collect())
}

/// Fetch one catalog entry.
///
/// # Errors
///
/// Returns `NotFound` if no such plant exists.
pub async fn get_plant(pool: &PgPool, plant_id: Uuid) -> Result<PlantRow, PlantError> {
    let row = sqlx::query_as::<_, PlantTuple>(
        "SELECT id, name, scientific_name, planting_season, harvest_time, description, care_instructions
         FROM plants WHERE id = $1",
    )
    .bind(plant_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PlantError::NotFound(plant_id))?;

    Ok(to_row(row))
}

/// Add a plant to the catalog. Admin-only.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, a database error if the insert
/// fails.
pub async fn create_plant(pool: &PgPool, caller: &ProfileRow, input: &PlantInput) -> Result<PlantRow, PlantError> {
    ensure_admin(caller)?;

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO plants (name, scientific_name, planting_season, harvest_time, description, care_instructions)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(&input.name)
    .bind(&input.scientific_name)
    .bind(&input.planting_season)
    .bind(input.harvest_time)
    .bind(&input.description)
    .bind(&input.care_instructions)
    .fetch_one(pool)
    .await?;

    tracing::info!(%id, name = %input.name, "plant added to catalog");
    get_plant(pool, id).await
}

/// Update a catalog entry. Admin-only. All fields are replaced.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, `NotFound` for a missing plant.
pub async fn update_plant(
    pool: &PgPool,
    caller: &ProfileRow,
    plant_id: Uuid,
    input: &PlantInput,
) -> Result<PlantRow, PlantError> {
    ensure_admin(caller)?;

    let result = sqlx::query(
        "UPDATE plants
         SET name = $2, scientific_name = $3, planting_season = $4,
             harvest_time = $5, description = $6, care_instructions = $7
         WHERE id = $1",
    )
    .bind(plant_id)
    .bind(&input.name)
    .bind(&input.scientific_name)
    .bind(&input.planting_season)
    .bind(input.harvest_time)
    .bind(&input.description)
    .bind(&input.care_instructions)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(PlantError::NotFound(plant_id));
    }
    get_plant(pool, plant_id).await
}

/// Remove a plant from the catalog. Admin-only. Plantings of it cascade.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, `NotFound` for a missing plant.
pub async fn delete_plant(pool: &PgPool, caller: &ProfileRow, plant_id: Uuid) -> Result<(), PlantError> {
    ensure_admin(caller)?;

    let result = sqlx::query("DELETE FROM plants WHERE id = $1")
        .bind(plant_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PlantError::NotFound(plant_id));
    }
    tracing::info!(%plant_id, "plant removed from catalog");
    Ok(())
}

#[cfg(test)]
#[path = "plant_test.rs"]
mod tests;
