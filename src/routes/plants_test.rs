use super::*;

#[test]
fn plant_error_to_status_maps_not_found() {
    let err = plant::PlantError::NotFound(Uuid::nil());
    assert_eq!(plant_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn plant_error_to_status_maps_forbidden() {
    assert_eq!(plant_error_to_status(&plant::PlantError::Forbidden), StatusCode::FORBIDDEN);
}

#[test]
fn plant_input_full_round_trip() {
    let input: PlantInput = serde_json::from_str(
        r#"{
            "name": "Carrot",
            "scientific_name": "Daucus carota",
            "planting_season": "spring",
            "harvest_time": 70,
            "description": "Root vegetable",
            "care_instructions": "Thin seedlings to 2 inches"
        }"#,
    )
    .unwrap();
    assert_eq!(input.name, "Carrot");
    assert_eq!(input.scientific_name, "Daucus carota");
    assert_eq!(input.harvest_time, 70);
}
