//! Plot service — CRUD and gardener assignment.
//!
//! DESIGN
//! ======
//! Plot status is never taken from the client. It is derived from the plot's
//! own rows: a plot with a live planting is `planted`, otherwise it is
//! `assigned` when a gardener holds it and `available` when nobody does.
//! Every mutation re-derives status through `derived_status`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::services::profile::{ProfileRow, Role};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("plot not found: {0}")]
    NotFound(Uuid),
    #[error("operation requires admin role")]
    Forbidden,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Plot lifecycle. Stored as lowercase text in `garden_plots.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotStatus {
    Available,
    Assigned,
    Planted,
}

impl PlotStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Assigned => "assigned",
            Self::Planted => "planted",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "assigned" => Some(Self::Assigned),
            "planted" => Some(Self::Planted),
            _ => None,
        }
    }
}

/// Row returned from plot queries, joined with the assignee when present.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlotRow {
    pub id: Uuid,
    pub location: String,
    pub size: String,
    pub assigned_user_id: Option<Uuid>,
    pub status: PlotStatus,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
}

/// Derive plot status from its assignment and live plantings.
#[must_use]
pub fn derived_status(assigned: bool, active_plantings: i64) -> PlotStatus {
    if active_plantings > 0 {
        PlotStatus::Planted
    } else if assigned {
        PlotStatus::Assigned
    } else {
        PlotStatus::Available
    }
}

fn ensure_admin(caller: &ProfileRow) -> Result<(), PlotError> {
    if caller.role == Role::Admin {
        Ok(())
    } else {
        Err(PlotError::Forbidden)
    }
}

type PlotTuple = (Uuid, String, String, Option<Uuid>, String, Option<String>, Option<String>);

fn to_row((id, location, size, assigned_user_id, status, assignee_name, assignee_email): PlotTuple) -> PlotRow {
    PlotRow {
        id,
        location,
        size,
        assigned_user_id,
        status: PlotStatus::from_str(&status).unwrap_or(PlotStatus::Available),
        assignee_name,
        assignee_email,
    }
}

const PLOT_SELECT: &str = "SELECT gp.id, gp.location, gp.size, gp.assigned_user_id, gp.status,
            p.full_name, p.email
     FROM garden_plots gp
     LEFT JOIN profiles p ON p.id = gp.assigned_user_id";

// =============================================================================
// CRUD
// =============================================================================

/// List all plots with their assignees, ordered by location.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_plots(pool: &PgPool) -> Result<Vec<PlotRow>, PlotError> {
    let rows = sqlx::query_as::<_, PlotTuple>(&format!("{PLOT_SELECT} ORDER BY gp.location ASC"))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(to_row).collect())
}

/// Fetch one plot.
///
/// # Errors
///
/// Returns `NotFound` if no such plot exists.
pub async fn get_plot(pool: &PgPool, plot_id: Uuid) -> Result<PlotRow, PlotError> {
    let row = sqlx::query_as::<_, PlotTuple>(&format!("{PLOT_SELECT} WHERE gp.id = $1"))
        .bind(plot_id)
        .fetch_optional(pool)
        .await?
        .ok_or(PlotError::NotFound(plot_id))?;

    Ok(to_row(row))
}

/// Create a new plot. Admin-only.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, a database error if the insert
/// fails.
pub async fn create_plot(
    pool: &PgPool,
    caller: &ProfileRow,
    location: &str,
    size: &str,
    assigned_user_id: Option<Uuid>,
) -> Result<PlotRow, PlotError> {
    ensure_admin(caller)?;

    let status = derived_status(assigned_user_id.is_some(), 0);
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO garden_plots (location, size, assigned_user_id, status)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(location)
    .bind(size)
    .bind(assigned_user_id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;

    tracing::info!(%id, location, "plot created");
    get_plot(pool, id).await
}

/// Update a plot's location, size, and/or assignee. Admin-only.
///
/// `assigned_user_id` uses double-Option semantics: `None` leaves the
/// assignment untouched, `Some(None)` clears it.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, `NotFound` for a missing plot.
pub async fn update_plot(
    pool: &PgPool,
    caller: &ProfileRow,
    plot_id: Uuid,
    location: Option<&str>,
    size: Option<&str>,
    assigned_user_id: Option<Option<Uuid>>,
) -> Result<PlotRow, PlotError> {
    ensure_admin(caller)?;

    let current = get_plot(pool, plot_id).await?;
    let next_assignee = match assigned_user_id {
        Some(value) => value,
        None => current.assigned_user_id,
    };

    let active = active_planting_count(pool, plot_id).await?;
    let status = derived_status(next_assignee.is_some(), active);

    let result = sqlx::query(
        "UPDATE garden_plots
         SET location = COALESCE($2, location),
             size = COALESCE($3, size),
             assigned_user_id = $4,
             status = $5,
             updated_at = now()
         WHERE id = $1",
    )
    .bind(plot_id)
    .bind(location)
    .bind(size)
    .bind(next_assignee)
    .bind(status.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(PlotError::NotFound(plot_id));
    }
    get_plot(pool, plot_id).await
}

/// Assign (or unassign) a gardener to a plot. Admin-only.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, `NotFound` for a missing plot.
pub async fn assign_plot(
    pool: &PgPool,
    caller: &ProfileRow,
    plot_id: Uuid,
    user_id: Option<Uuid>,
) -> Result<PlotRow, PlotError> {
    update_plot(pool, caller, plot_id, None, None, Some(user_id)).await
}

/// Delete a plot. Admin-only. Plantings cascade; tasks keep their rows with
/// the plot reference nulled.
///
/// # Errors
///
/// Returns `Forbidden` for non-admin callers, `NotFound` for a missing plot.
pub async fn delete_plot(pool: &PgPool, caller: &ProfileRow, plot_id: Uuid) -> Result<(), PlotError> {
    ensure_admin(caller)?;

    let result = sqlx::query("DELETE FROM garden_plots WHERE id = $1")
        .bind(plot_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PlotError::NotFound(plot_id));
    }
    tracing::info!(%plot_id, "plot deleted");
    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

pub(crate) async fn active_planting_count(pool: &PgPool, plot_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM plot_plants WHERE plot_id = $1 AND status <> 'harvested'")
        .bind(plot_id)
        .fetch_one(pool)
        .await
}

/// Re-derive and persist a plot's status after its plantings changed.
pub(crate) async fn refresh_plot_status(pool: &PgPool, plot_id: Uuid) -> Result<(), sqlx::Error> {
    let assigned: Option<bool> = sqlx::query_scalar("SELECT assigned_user_id IS NOT NULL FROM garden_plots WHERE id = $1")
        .bind(plot_id)
        .fetch_optional(pool)
        .await?;
    let Some(assigned) = assigned else {
        return Ok(());
    };

    let active = active_planting_count(pool, plot_id).await?;
    let status = derived_status(assigned, active);

    sqlx::query("UPDATE garden_plots SET status = $2, updated_at = now() WHERE id = $1")
        .bind(plot_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "plot_test.rs"]
mod tests;
