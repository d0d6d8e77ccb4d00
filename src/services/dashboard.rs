//! Dashboard service — garden-wide stats and recent activity.
//!
//! DESIGN
//! ======
//! Activity is assembled from real rows rather than a dedicated event table:
//! recently completed tasks, recent plot assignments, and recent plantings
//! are fetched separately, then merged newest-first.

use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

const ACTIVITY_LIMIT: usize = 10;
const PER_SOURCE_LIMIT: i64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct DashboardStats {
    pub total_plots: i64,
    pub assigned_plots: i64,
    pub active_tasks: i64,
    pub total_plantings: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PlotAssigned,
    TaskCompleted,
    PlantAdded,
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub user_name: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Merge activity entries from all sources, newest first, capped at `limit`.
#[must_use]
pub fn merge_activity(mut entries: Vec<ActivityEntry>, limit: usize) -> Vec<ActivityEntry> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}

/// Headline stats for the dashboard cards.
///
/// # Errors
///
/// Returns a database error if a count query fails.
pub async fn stats(pool: &PgPool) -> Result<DashboardStats, DashboardError> {
    let total_plots: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM garden_plots")
        .fetch_one(pool)
        .await?;
    let assigned_plots: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM garden_plots WHERE assigned_user_id IS NOT NULL")
        .fetch_one(pool)
        .await?;
    let active_tasks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status <> 'completed'")
        .fetch_one(pool)
        .await?;
    let total_plantings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plot_plants")
        .fetch_one(pool)
        .await?;

    Ok(DashboardStats { total_plots, assigned_plots, active_tasks, total_plantings })
}

/// Recent activity across tasks, assignments, and plantings.
///
/// # Errors
///
/// Returns a database error if a query fails.
pub async fn recent_activity(pool: &PgPool) -> Result<Vec<ActivityEntry>, DashboardError> {
    let mut entries = Vec::new();

    let completed = sqlx::query_as::<_, (Uuid, String, OffsetDateTime, String)>(
        "SELECT t.id, t.title, t.updated_at, p.full_name
         FROM tasks t
         JOIN profiles p ON p.id = t.assigned_user_id
         WHERE t.status = 'completed'
         ORDER BY t.updated_at DESC
         LIMIT $1",
    )
    .bind(PER_SOURCE_LIMIT)
    .fetch_all(pool)
    .await?;
    for (id, title, timestamp, user_name) in completed {
        entries.push(ActivityEntry {
            id,
            kind: ActivityKind::TaskCompleted,
            description: format!("Task \"{title}\" completed"),
            timestamp,
            user_name: Some(user_name),
        });
    }

    let assignments = sqlx::query_as::<_, (Uuid, String, OffsetDateTime, String)>(
        "SELECT gp.id, gp.location, gp.updated_at, p.full_name
         FROM garden_plots gp
         JOIN profiles p ON p.id = gp.assigned_user_id
         ORDER BY gp.updated_at DESC
         LIMIT $1",
    )
    .bind(PER_SOURCE_LIMIT)
    .fetch_all(pool)
    .await?;
    for (id, location, timestamp, user_name) in assignments {
        entries.push(ActivityEntry {
            id,
            kind: ActivityKind::PlotAssigned,
            description: format!("Plot {location} assigned"),
            timestamp,
            user_name: Some(user_name),
        });
    }

    let plantings = sqlx::query_as::<_, (Uuid, String, String, OffsetDateTime)>(
        "SELECT pp.id, pl.name, gp.location, pp.created_at
         FROM plot_plants pp
         JOIN plants pl ON pl.id = pp.plant_id
         JOIN garden_plots gp ON gp.id = pp.plot_id
         ORDER BY pp.created_at DESC
         LIMIT $1",
    )
    .bind(PER_SOURCE_LIMIT)
    .fetch_all(pool)
    .await?;
    for (id, plant_name, location, timestamp) in plantings {
        entries.push(ActivityEntry {
            id,
            kind: ActivityKind::PlantAdded,
            description: format!("{plant_name} planted in plot {location}"),
            timestamp,
            user_name: None,
        });
    }

    Ok(merge_activity(entries, ACTIVITY_LIMIT))
}

/// Full dashboard payload.
///
/// # Errors
///
/// Returns a database error if any query fails.
pub async fn view(pool: &PgPool) -> Result<DashboardView, DashboardError> {
    Ok(DashboardView { stats: stats(pool).await?, recent_activity: recent_activity(pool).await? })
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
