//! Schedule service — calendar view over planting records.
//!
//! A date's events are the plantings planted or expected to be harvested on
//! that date. The filter is a plain pass over the fetched rows, matching the
//! original calendar behavior.

use sqlx::PgPool;
use time::Date;

use crate::services::planting::{self, PlantingError, PlantingRow, PlantingStatus};

/// How many upcoming events the schedule view shows.
pub const UPCOMING_LIMIT: usize = 6;

/// Events for one calendar day plus the next few upcoming harvests.
#[derive(Debug, serde::Serialize)]
pub struct DaySchedule {
    pub date: Date,
    pub events: Vec<PlantingRow>,
    pub upcoming: Vec<PlantingRow>,
}

/// Plantings planted or due for harvest on the given date.
#[must_use]
pub fn events_on(plantings: &[PlantingRow], date: Date) -> Vec<PlantingRow> {
    plantings
        .iter()
        .filter(|event| event.planted_date == date || event.expected_harvest_date == date)
        .cloned()
        .collect()
}

/// The next `limit` unharvested plantings due on or after `today`, soonest
/// first.
#[must_use]
pub fn upcoming(plantings: &[PlantingRow], today: Date, limit: usize) -> Vec<PlantingRow> {
    let mut pending = plantings
        .iter()
        .filter(|event| event.status != PlantingStatus::Harvested && event.expected_harvest_date >= today)
        .cloned()
        .collect::<Vec<_>>();
    pending.sort_by_key(|event| event.expected_harvest_date);
    pending.truncate(limit);
    pending
}

/// Build the schedule for one day.
///
/// # Errors
///
/// Returns a database error if the planting query fails.
pub async fn day_schedule(pool: &PgPool, date: Date, today: Date) -> Result<DaySchedule, PlantingError> {
    let plantings = planting::list_plantings(pool).await?;
    Ok(DaySchedule {
        date,
        events: events_on(&plantings, date),
        upcoming: upcoming(&plantings, today, UPCOMING_LIMIT),
    })
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
