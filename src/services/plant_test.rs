use super::*;

fn gardener() -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        email: "g@example.com".into(),
        full_name: "G".into(),
        role: Role::Gardener,
    }
}

#[test]
fn ensure_admin_rejects_gardener() {
    assert!(matches!(ensure_admin(&gardener()), Err(PlantError::Forbidden)));
}

#[test]
fn plant_input_defaults_optional_fields() {
    let input: PlantInput = serde_json::from_str(
        r#"{"name":"Tomato","planting_season":"spring","harvest_time":75}"#,
    )
    .unwrap();
    assert_eq!(input.name, "Tomato");
    assert_eq!(input.harvest_time, 75);
    assert_eq!(input.scientific_name, "");
    assert_eq!(input.description, "");
    assert_eq!(input.care_instructions, "");
}

#[test]
fn plant_input_rejects_missing_required_field() {
    let result = serde_json::from_str::<PlantInput>(r#"{"name":"Tomato"}"#);
    assert!(result.is_err());
}

#[test]
fn to_row_preserves_fields() {
    let id = Uuid::new_v4();
    let row = to_row((
        id,
        "Basil".into(),
        "Ocimum basilicum".into(),
        "summer".into(),
        60,
        "Fragrant herb".into(),
        "Pinch flowers early".into(),
    ));
    assert_eq!(row.id, id);
    assert_eq!(row.name, "Basil");
    assert_eq!(row.harvest_time, 60);
    assert_eq!(row.care_instructions, "Pinch flowers early");
}
