//! Planting service — records linking a plot to a plant species.
//!
//! DESIGN
//! ======
//! A planting carries its own planting and expected-harvest dates. When the
//! caller omits the harvest date it defaults to the planting date plus the
//! species' `harvest_time` days. Mutations re-derive the owning plot's
//! status so harvesting the last crop frees the plot.

use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::services::plot;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlantingError {
    #[error("planting not found: {0}")]
    NotFound(Uuid),
    #[error("plot not found: {0}")]
    PlotNotFound(Uuid),
    #[error("plant not found: {0}")]
    PlantNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Planting lifecycle. Stored as lowercase text in `plot_plants.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantingStatus {
    Planted,
    Growing,
    Harvested,
}

impl PlantingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planted => "planted",
            Self::Growing => "growing",
            Self::Harvested => "harvested",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "planted" => Some(Self::Planted),
            "growing" => Some(Self::Growing),
            "harvested" => Some(Self::Harvested),
            _ => None,
        }
    }
}

/// Row returned from planting queries, joined with plot location and plant
/// name for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlantingRow {
    pub id: Uuid,
    pub plot_id: Uuid,
    pub plant_id: Uuid,
    pub quantity: i32,
    pub planted_date: Date,
    pub expected_harvest_date: Date,
    pub status: PlantingStatus,
    pub notes: Option<String>,
    pub plot_location: String,
    pub plant_name: String,
}

/// Expected harvest date when the caller does not supply one.
#[must_use]
pub fn default_harvest_date(planted: Date, harvest_time_days: i32) -> Date {
    planted.saturating_add(time::Duration::days(i64::from(harvest_time_days)))
}

type PlantingTuple = (Uuid, Uuid, Uuid, i32, Date, Date, String, Option<String>, String, String);

fn to_row(
    (id, plot_id, plant_id, quantity, planted_date, expected_harvest_date, status, notes, plot_location, plant_name): PlantingTuple,
) -> PlantingRow {
    PlantingRow {
        id,
        plot_id,
        plant_id,
        quantity,
        planted_date,
        expected_harvest_date,
        status: PlantingStatus::from_str(&status).unwrap_or(PlantingStatus::Planted),
        notes,
        plot_location,
        plant_name,
    }
}

const PLANTING_SELECT: &str = "SELECT pp.id, pp.plot_id, pp.plant_id, pp.quantity, pp.planted_date,
            pp.expected_harvest_date, pp.status, pp.notes,
            gp.location, pl.name
     FROM plot_plants pp
     JOIN garden_plots gp ON gp.id = pp.plot_id
     JOIN plants pl ON pl.id = pp.plant_id";

// =============================================================================
// CRUD
// =============================================================================

/// List all plantings ordered by planting date.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_plantings(pool: &PgPool) -> Result<Vec<PlantingRow>, PlantingError> {
    let rows = sqlx::query_as::<_, PlantingTuple>(&format!("{PLANTING_SELECT} ORDER BY pp.planted_date ASC"))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(to_row).collect())
}

/// Fetch one planting.
///
/// # Errors
///
/// Returns `NotFound` if no such planting exists.
pub async fn get_planting(pool: &PgPool, planting_id: Uuid) -> Result<PlantingRow, PlantingError> {
    let row = sqlx::query_as::<_, PlantingTuple>(&format!("{PLANTING_SELECT} WHERE pp.id = $1"))
        .bind(planting_id)
        .fetch_optional(pool)
        .await?
        .ok_or(PlantingError::NotFound(planting_id))?;

    Ok(to_row(row))
}

/// Record a planting. The plot moves to `planted` status.
///
/// # Errors
///
/// Returns `PlotNotFound`/`PlantNotFound` for dangling references, a database
/// error if the insert fails.
pub async fn create_planting(
    pool: &PgPool,
    plot_id: Uuid,
    plant_id: Uuid,
    quantity: i32,
    planted_date: Date,
    expected_harvest_date: Option<Date>,
    notes: Option<&str>,
) -> Result<PlantingRow, PlantingError> {
    let plot_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM garden_plots WHERE id = $1)")
        .bind(plot_id)
        .fetch_one(pool)
        .await?;
    if !plot_exists {
        return Err(PlantingError::PlotNotFound(plot_id));
    }

    let harvest_time: i32 = sqlx::query_scalar("SELECT harvest_time FROM plants WHERE id = $1")
        .bind(plant_id)
        .fetch_optional(pool)
        .await?
        .ok_or(PlantingError::PlantNotFound(plant_id))?;

    let harvest_date = expected_harvest_date.unwrap_or_else(|| default_harvest_date(planted_date, harvest_time));

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO plot_plants (plot_id, plant_id, quantity, planted_date, expected_harvest_date, notes)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(plot_id)
    .bind(plant_id)
    .bind(quantity)
    .bind(planted_date)
    .bind(harvest_date)
    .bind(notes)
    .fetch_one(pool)
    .await?;

    plot::refresh_plot_status(pool, plot_id).await?;
    tracing::info!(%id, %plot_id, %plant_id, "planting recorded");
    get_planting(pool, id).await
}

/// Update a planting's status, quantity, dates, and/or notes. The owning
/// plot's status is re-derived afterwards.
///
/// # Errors
///
/// Returns `NotFound` for a missing planting.
pub async fn update_planting(
    pool: &PgPool,
    planting_id: Uuid,
    status: Option<PlantingStatus>,
    quantity: Option<i32>,
    planted_date: Option<Date>,
    expected_harvest_date: Option<Date>,
    notes: Option<&str>,
) -> Result<PlantingRow, PlantingError> {
    let plot_id: Uuid = sqlx::query_scalar(
        "UPDATE plot_plants
         SET status = COALESCE($2, status),
             quantity = COALESCE($3, quantity),
             planted_date = COALESCE($4, planted_date),
             expected_harvest_date = COALESCE($5, expected_harvest_date),
             notes = COALESCE($6, notes)
         WHERE id = $1
         RETURNING plot_id",
    )
    .bind(planting_id)
    .bind(status.map(PlantingStatus::as_str))
    .bind(quantity)
    .bind(planted_date)
    .bind(expected_harvest_date)
    .bind(notes)
    .fetch_optional(pool)
    .await?
    .ok_or(PlantingError::NotFound(planting_id))?;

    plot::refresh_plot_status(pool, plot_id).await?;
    get_planting(pool, planting_id).await
}

/// Delete a planting, then re-derive the plot's status.
///
/// # Errors
///
/// Returns `NotFound` for a missing planting.
pub async fn delete_planting(pool: &PgPool, planting_id: Uuid) -> Result<(), PlantingError> {
    let plot_id: Option<Uuid> = sqlx::query_scalar("DELETE FROM plot_plants WHERE id = $1 RETURNING plot_id")
        .bind(planting_id)
        .fetch_optional(pool)
        .await?;

    let Some(plot_id) = plot_id else {
        return Err(PlantingError::NotFound(planting_id));
    };

    plot::refresh_plot_status(pool, plot_id).await?;
    tracing::info!(%planting_id, "planting deleted");
    Ok(())
}

#[cfg(test)]
#[path = "planting_test.rs"]
mod tests;
