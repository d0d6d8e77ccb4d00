use super::*;
use time::macros::date;

#[test]
fn planting_errors_map_to_not_found() {
    assert_eq!(
        planting_error_to_status(&planting::PlantingError::NotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        planting_error_to_status(&planting::PlantingError::PlotNotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        planting_error_to_status(&planting::PlantingError::PlantNotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn create_body_parses_iso_dates() {
    let plot_id = Uuid::new_v4();
    let plant_id = Uuid::new_v4();
    let body: CreatePlantingBody = serde_json::from_str(&format!(
        r#"{{"plot_id":"{plot_id}","plant_id":"{plant_id}","planted_date":"2025-04-01"}}"#
    ))
    .unwrap();
    assert_eq!(body.planted_date, date!(2025 - 04 - 01));
    assert!(body.expected_harvest_date.is_none());
}

#[test]
fn create_body_quantity_defaults_to_one() {
    let body: CreatePlantingBody = serde_json::from_str(&format!(
        r#"{{"plot_id":"{}","plant_id":"{}","planted_date":"2025-04-01"}}"#,
        Uuid::nil(),
        Uuid::nil()
    ))
    .unwrap();
    assert_eq!(body.quantity, 1);
}

#[test]
fn create_body_rejects_malformed_date() {
    let result = serde_json::from_str::<CreatePlantingBody>(&format!(
        r#"{{"plot_id":"{}","plant_id":"{}","planted_date":"04/01/2025"}}"#,
        Uuid::nil(),
        Uuid::nil()
    ));
    assert!(result.is_err());
}

#[test]
fn update_body_all_fields_optional() {
    let body: UpdatePlantingBody = serde_json::from_str("{}").unwrap();
    assert!(body.status.is_none());
    assert!(body.quantity.is_none());
    assert!(body.planted_date.is_none());
    assert!(body.expected_harvest_date.is_none());
    assert!(body.notes.is_none());
}
