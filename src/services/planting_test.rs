use super::*;
use time::macros::date;

// =============================================================================
// default_harvest_date
// =============================================================================

#[test]
fn default_harvest_adds_days() {
    let planted = date!(2025 - 03 - 15);
    assert_eq!(default_harvest_date(planted, 75), date!(2025 - 05 - 29));
}

#[test]
fn default_harvest_zero_days_is_same_date() {
    let planted = date!(2025 - 06 - 01);
    assert_eq!(default_harvest_date(planted, 0), planted);
}

#[test]
fn default_harvest_crosses_year_boundary() {
    let planted = date!(2025 - 12 - 01);
    assert_eq!(default_harvest_date(planted, 60), date!(2026 - 01 - 30));
}

// =============================================================================
// PlantingStatus
// =============================================================================

#[test]
fn planting_status_round_trips_through_str() {
    for status in [PlantingStatus::Planted, PlantingStatus::Growing, PlantingStatus::Harvested] {
        assert_eq!(PlantingStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn planting_status_from_str_rejects_unknown() {
    assert_eq!(PlantingStatus::from_str("sprouting"), None);
    assert_eq!(PlantingStatus::from_str(""), None);
}

#[test]
fn planting_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&PlantingStatus::Harvested).unwrap(), "\"harvested\"");
}

// =============================================================================
// to_row
// =============================================================================

#[test]
fn to_row_maps_joined_names() {
    let id = Uuid::new_v4();
    let row = to_row((
        id,
        Uuid::new_v4(),
        Uuid::new_v4(),
        4,
        date!(2025 - 04 - 01),
        date!(2025 - 06 - 15),
        "growing".into(),
        Some("mulched".into()),
        "A-1".into(),
        "Tomato".into(),
    ));
    assert_eq!(row.id, id);
    assert_eq!(row.quantity, 4);
    assert_eq!(row.status, PlantingStatus::Growing);
    assert_eq!(row.plot_location, "A-1");
    assert_eq!(row.plant_name, "Tomato");
}

#[test]
fn to_row_serializes_dates_as_iso() {
    let row = to_row((
        Uuid::nil(),
        Uuid::nil(),
        Uuid::nil(),
        1,
        date!(2025 - 04 - 01),
        date!(2025 - 06 - 15),
        "planted".into(),
        None,
        "B-2".into(),
        "Basil".into(),
    ));
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["planted_date"], "2025-04-01");
    assert_eq!(json["expected_harvest_date"], "2025-06-15");
    assert!(json["notes"].is_null());
}
