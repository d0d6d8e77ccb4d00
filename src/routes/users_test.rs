use super::*;

#[test]
fn profile_error_to_status_maps_not_found() {
    let err = profile::ProfileError::NotFound(Uuid::nil());
    assert_eq!(profile_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn profile_error_to_status_maps_forbidden() {
    assert_eq!(profile_error_to_status(&profile::ProfileError::Forbidden), StatusCode::FORBIDDEN);
}

#[test]
fn user_detail_response_flattens_profile() {
    let response = UserDetailResponse {
        profile: ProfileRow {
            id: Uuid::nil(),
            email: "alice@example.com".into(),
            full_name: "Alice".into(),
            role: Role::Gardener,
        },
        stats: ProfileStats { plots_assigned: 2, open_tasks: 3 },
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["role"], "gardener");
    assert_eq!(json["stats"]["plots_assigned"], 2);
    assert_eq!(json["stats"]["open_tasks"], 3);
}

#[test]
fn update_user_body_accepts_partial_fields() {
    let body: UpdateUserBody = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
    assert!(body.full_name.is_none());
    assert_eq!(body.role.as_deref(), Some("admin"));
}
