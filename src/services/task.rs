//! Task service — maintenance work assigned to members, optionally on a plot.

use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::services::profile::{ProfileRow, Role};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(Uuid),
    #[error("only the creator or an admin may do that")]
    Forbidden,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Task lifecycle. Stored as lowercase text in `tasks.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Task urgency. Stored as lowercase text in `tasks.priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// List filter matching the original page tabs. `Pending` includes
/// in-progress work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Mine,
    Pending,
    Completed,
}

impl TaskFilter {
    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "mine" | "my-tasks" => Some(Self::Mine),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Row returned from task queries, joined with assignee and plot location.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TaskRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Date,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_user_id: Uuid,
    pub plot_id: Option<Uuid>,
    pub created_by: Uuid,
    pub assignee_name: String,
    pub assignee_email: String,
    pub plot_location: Option<String>,
}

/// Whether a task row passes the given filter for the given caller.
#[must_use]
pub fn matches_filter(task: &TaskRow, filter: TaskFilter, caller_id: Uuid) -> bool {
    match filter {
        TaskFilter::All => true,
        TaskFilter::Mine => task.assigned_user_id == caller_id,
        TaskFilter::Pending => matches!(task.status, TaskStatus::Pending | TaskStatus::InProgress),
        TaskFilter::Completed => task.status == TaskStatus::Completed,
    }
}

type TaskTuple = (
    Uuid,
    String,
    String,
    Date,
    String,
    String,
    Uuid,
    Option<Uuid>,
    Uuid,
    String,
    String,
    Option<String>,
);

fn to_row(
    (id, title, description, due_date, priority, status, assigned_user_id, plot_id, created_by, assignee_name, assignee_email, plot_location): TaskTuple,
) -> TaskRow {
    TaskRow {
        id,
        title,
        description,
        due_date,
        priority: TaskPriority::from_str(&priority).unwrap_or(TaskPriority::Medium),
        status: TaskStatus::from_str(&status).unwrap_or(TaskStatus::Pending),
        assigned_user_id,
        plot_id,
        created_by,
        assignee_name,
        assignee_email,
        plot_location,
    }
}

const TASK_SELECT: &str = "SELECT t.id, t.title, t.description, t.due_date, t.priority, t.status,
            t.assigned_user_id, t.plot_id, t.created_by,
            p.full_name, p.email, gp.location
     FROM tasks t
     JOIN profiles p ON p.id = t.assigned_user_id
     LEFT JOIN garden_plots gp ON gp.id = t.plot_id";

// =============================================================================
// CRUD
// =============================================================================

/// List tasks ordered by due date, filtered per the caller's tab selection.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_tasks(pool: &PgPool, filter: TaskFilter, caller_id: Uuid) -> Result<Vec<TaskRow>, TaskError> {
    let rows = sqlx::query_as::<_, TaskTuple>(&format!("{TASK_SELECT} ORDER BY t.due_date ASC"))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(to_row)
        .filter(|task| matches_filter(task, filter, caller_id))
        .collect())
}

/// Fetch one task.
///
/// # Errors
///
/// Returns `NotFound` if no such task exists.
pub async fn get_task(pool: &PgPool, task_id: Uuid) -> Result<TaskRow, TaskError> {
    let row = sqlx::query_as::<_, TaskTuple>(&format!("{TASK_SELECT} WHERE t.id = $1"))
        .bind(task_id)
        .fetch_optional(pool)
        .await?
        .ok_or(TaskError::NotFound(task_id))?;

    Ok(to_row(row))
}

/// Create a task assigned to a member, optionally tied to a plot.
///
/// # Errors
///
/// Returns a database error if the insert fails.
#[allow(clippy::too_many_arguments)]
pub async fn create_task(
    pool: &PgPool,
    creator_id: Uuid,
    title: &str,
    description: &str,
    due_date: Date,
    priority: TaskPriority,
    assigned_user_id: Uuid,
    plot_id: Option<Uuid>,
) -> Result<TaskRow, TaskError> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO tasks (title, description, due_date, priority, assigned_user_id, plot_id, created_by)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id",
    )
    .bind(title)
    .bind(description)
    .bind(due_date)
    .bind(priority.as_str())
    .bind(assigned_user_id)
    .bind(plot_id)
    .bind(creator_id)
    .fetch_one(pool)
    .await?;

    tracing::info!(%id, title, "task created");
    get_task(pool, id).await
}

/// Update a task's fields. Absent fields are left untouched.
///
/// # Errors
///
/// Returns `NotFound` for a missing task.
#[allow(clippy::too_many_arguments)]
pub async fn update_task(
    pool: &PgPool,
    task_id: Uuid,
    title: Option<&str>,
    description: Option<&str>,
    due_date: Option<Date>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
    assigned_user_id: Option<Uuid>,
) -> Result<TaskRow, TaskError> {
    let result = sqlx::query(
        "UPDATE tasks
         SET title = COALESCE($2, title),
             description = COALESCE($3, description),
             due_date = COALESCE($4, due_date),
             priority = COALESCE($5, priority),
             status = COALESCE($6, status),
             assigned_user_id = COALESCE($7, assigned_user_id),
             updated_at = now()
         WHERE id = $1",
    )
    .bind(task_id)
    .bind(title)
    .bind(description)
    .bind(due_date)
    .bind(priority.map(TaskPriority::as_str))
    .bind(status.map(TaskStatus::as_str))
    .bind(assigned_user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(TaskError::NotFound(task_id));
    }
    get_task(pool, task_id).await
}

/// Set just the status (the original page's quick toggle).
///
/// # Errors
///
/// Returns `NotFound` for a missing task.
pub async fn update_task_status(pool: &PgPool, task_id: Uuid, status: TaskStatus) -> Result<TaskRow, TaskError> {
    update_task(pool, task_id, None, None, None, None, Some(status), None).await
}

/// Delete a task. Only the creator or an admin may delete.
///
/// # Errors
///
/// Returns `Forbidden` for other callers, `NotFound` for a missing task.
pub async fn delete_task(pool: &PgPool, caller: &ProfileRow, task_id: Uuid) -> Result<(), TaskError> {
    let created_by: Uuid = sqlx::query_scalar("SELECT created_by FROM tasks WHERE id = $1")
        .bind(task_id)
        .fetch_optional(pool)
        .await?
        .ok_or(TaskError::NotFound(task_id))?;

    if caller.role != Role::Admin && caller.id != created_by {
        return Err(TaskError::Forbidden);
    }

    sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id)
        .execute(pool)
        .await?;
    tracing::info!(%task_id, "task deleted");
    Ok(())
}

#[cfg(test)]
#[path = "task_test.rs"]
mod tests;
