//! Schedule routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::routes::auth::AuthUser;
use crate::routes::plantings::planting_error_to_status;
use crate::services::schedule::{self, DaySchedule};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScheduleQuery {
    /// ISO date (`YYYY-MM-DD`). Defaults to today.
    pub date: Option<Date>,
}

/// `GET /api/schedule?date=YYYY-MM-DD` — events for one day plus upcoming
/// harvests.
pub async fn day_schedule(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<DaySchedule>, StatusCode> {
    let today = OffsetDateTime::now_utc().date();
    let date = query.date.unwrap_or(today);

    let view = schedule::day_schedule(&state.pool, date, today)
        .await
        .map_err(|e| planting_error_to_status(&e))?;
    Ok(Json(view))
}
