use super::*;

fn admin() -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        email: "admin@example.com".into(),
        full_name: "Admin".into(),
        role: Role::Admin,
    }
}

fn gardener() -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        email: "gardener@example.com".into(),
        full_name: "Gardener".into(),
        role: Role::Gardener,
    }
}

// =============================================================================
// derived_status
// =============================================================================

#[test]
fn derived_status_unassigned_no_plantings() {
    assert_eq!(derived_status(false, 0), PlotStatus::Available);
}

#[test]
fn derived_status_assigned_no_plantings() {
    assert_eq!(derived_status(true, 0), PlotStatus::Assigned);
}

#[test]
fn derived_status_plantings_win_over_assignment() {
    assert_eq!(derived_status(true, 1), PlotStatus::Planted);
    assert_eq!(derived_status(false, 3), PlotStatus::Planted);
}

// =============================================================================
// PlotStatus
// =============================================================================

#[test]
fn plot_status_round_trips_through_str() {
    for status in [PlotStatus::Available, PlotStatus::Assigned, PlotStatus::Planted] {
        assert_eq!(PlotStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn plot_status_from_str_rejects_unknown() {
    assert_eq!(PlotStatus::from_str("fallow"), None);
    assert_eq!(PlotStatus::from_str("Available"), None);
}

#[test]
fn plot_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&PlotStatus::Planted).unwrap(), "\"planted\"");
}

// =============================================================================
// ensure_admin
// =============================================================================

#[test]
fn ensure_admin_accepts_admin() {
    assert!(ensure_admin(&admin()).is_ok());
}

#[test]
fn ensure_admin_rejects_gardener() {
    assert!(matches!(ensure_admin(&gardener()), Err(PlotError::Forbidden)));
}

// =============================================================================
// to_row
// =============================================================================

#[test]
fn to_row_maps_joined_assignee() {
    let id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let row = to_row((
        id,
        "A-1".into(),
        "4x8 feet".into(),
        Some(user_id),
        "assigned".into(),
        Some("Alice".into()),
        Some("alice@example.com".into()),
    ));
    assert_eq!(row.id, id);
    assert_eq!(row.assigned_user_id, Some(user_id));
    assert_eq!(row.status, PlotStatus::Assigned);
    assert_eq!(row.assignee_name.as_deref(), Some("Alice"));
}

#[test]
fn to_row_defaults_unknown_status_to_available() {
    let row = to_row((Uuid::nil(), "B-2".into(), "3x3 m".into(), None, "bogus".into(), None, None));
    assert_eq!(row.status, PlotStatus::Available);
}
