use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_round_trips_through_str() {
    for role in [Role::Admin, Role::Gardener] {
        assert_eq!(Role::from_str(role.as_str()), Some(role));
    }
}

#[test]
fn role_from_str_rejects_unknown() {
    assert_eq!(Role::from_str("supervisor"), None);
    assert_eq!(Role::from_str(""), None);
    assert_eq!(Role::from_str("Admin"), None);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Gardener).unwrap(), "\"gardener\"");
}

#[test]
fn role_deserializes_lowercase() {
    let role: Role = serde_json::from_str("\"gardener\"").unwrap();
    assert_eq!(role, Role::Gardener);
}

#[test]
fn parse_role_defaults_to_gardener() {
    assert_eq!(parse_role("nonsense"), Role::Gardener);
    assert_eq!(parse_role("admin"), Role::Admin);
}

// =============================================================================
// ProfileRow
// =============================================================================

#[test]
fn profile_row_serializes_role_as_string() {
    let row = ProfileRow {
        id: Uuid::nil(),
        email: "alice@example.com".into(),
        full_name: "Alice".into(),
        role: Role::Admin,
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["email"], "alice@example.com");
}

// =============================================================================
// ProfileError
// =============================================================================

#[test]
fn profile_error_display() {
    let err = ProfileError::NotFound(Uuid::nil());
    assert!(err.to_string().contains("not found"));
    assert!(ProfileError::Forbidden.to_string().contains("admin"));
}
