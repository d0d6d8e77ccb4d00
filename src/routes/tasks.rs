//! Task routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::task::{self, TaskFilter, TaskPriority, TaskRow, TaskStatus};
use crate::state::AppState;

pub(crate) fn task_error_to_status(err: &task::TaskError) -> StatusCode {
    match err {
        task::TaskError::NotFound(_) => StatusCode::NOT_FOUND,
        task::TaskError::Forbidden => StatusCode::FORBIDDEN,
        task::TaskError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Deserialize)]
pub struct ListTasksQuery {
    pub filter: Option<String>,
}

/// `GET /api/tasks` — list tasks, filtered per the page tabs.
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskRow>>, StatusCode> {
    let filter = match query.filter.as_deref() {
        Some(raw) => TaskFilter::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?,
        None => TaskFilter::default(),
    };

    let rows = task::list_tasks(&state.pool, filter, auth.user.id)
        .await
        .map_err(|e| task_error_to_status(&e))?;
    Ok(Json(rows))
}

/// `GET /api/tasks/:id` — fetch one task.
pub async fn get_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<TaskRow>, StatusCode> {
    let row = task::get_task(&state.pool, task_id)
        .await
        .map_err(|e| task_error_to_status(&e))?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Date,
    pub priority: Option<String>,
    pub assigned_user_id: Uuid,
    pub plot_id: Option<Uuid>,
}

/// `POST /api/tasks` — create a task.
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskRow>), StatusCode> {
    if body.title.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let priority = match body.priority.as_deref() {
        Some(raw) => TaskPriority::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?,
        None => TaskPriority::Medium,
    };

    let row = task::create_task(
        &state.pool,
        auth.user.id,
        &body.title,
        &body.description,
        body.due_date,
        priority,
        body.assigned_user_id,
        body.plot_id,
    )
    .await
    .map_err(|e| task_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_user_id: Option<Uuid>,
}

/// `PATCH /api/tasks/:id` — update task fields.
pub async fn update_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskRow>, StatusCode> {
    let priority = match body.priority.as_deref() {
        Some(raw) => Some(TaskPriority::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };
    let status = match body.status.as_deref() {
        Some(raw) => Some(TaskStatus::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };

    let row = task::update_task(
        &state.pool,
        task_id,
        body.title.as_deref(),
        body.description.as_deref(),
        body.due_date,
        priority,
        status,
        body.assigned_user_id,
    )
    .await
    .map_err(|e| task_error_to_status(&e))?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct UpdateTaskStatusBody {
    pub status: String,
}

/// `PATCH /api/tasks/:id/status` — the quick status toggle.
pub async fn update_task_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Uuid>,
    Json(body): Json<UpdateTaskStatusBody>,
) -> Result<Json<TaskRow>, StatusCode> {
    let Some(status) = TaskStatus::from_str(&body.status) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let row = task::update_task_status(&state.pool, task_id, status)
        .await
        .map_err(|e| task_error_to_status(&e))?;
    Ok(Json(row))
}

/// `DELETE /api/tasks/:id` — delete a task. Creator or admin only.
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    task::delete_task(&state.pool, &auth.user, task_id)
        .await
        .map_err(|e| task_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;
