use super::*;

#[test]
fn plot_error_to_status_maps_not_found() {
    let err = plot::PlotError::NotFound(Uuid::nil());
    assert_eq!(plot_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn plot_error_to_status_maps_forbidden() {
    assert_eq!(plot_error_to_status(&plot::PlotError::Forbidden), StatusCode::FORBIDDEN);
}

// =============================================================================
// UpdatePlotBody double-option
// =============================================================================

#[test]
fn update_body_absent_assignee_leaves_untouched() {
    let body: UpdatePlotBody = serde_json::from_str(r#"{"location":"A-2"}"#).unwrap();
    assert!(body.assigned_user_id.is_none());
    assert_eq!(body.location.as_deref(), Some("A-2"));
}

#[test]
fn update_body_null_assignee_clears() {
    let body: UpdatePlotBody = serde_json::from_str(r#"{"assigned_user_id":null}"#).unwrap();
    assert_eq!(body.assigned_user_id, Some(None));
}

#[test]
fn update_body_uuid_assignee_sets() {
    let id = Uuid::new_v4();
    let body: UpdatePlotBody = serde_json::from_str(&format!(r#"{{"assigned_user_id":"{id}"}}"#)).unwrap();
    assert_eq!(body.assigned_user_id, Some(Some(id)));
}

// =============================================================================
// CreatePlotBody
// =============================================================================

#[test]
fn create_body_requires_location_and_size() {
    let result = serde_json::from_str::<CreatePlotBody>(r#"{"location":"A-1"}"#);
    assert!(result.is_err());
}

#[test]
fn create_body_assignee_optional() {
    let body: CreatePlotBody = serde_json::from_str(r#"{"location":"A-1","size":"4x8 feet"}"#).unwrap();
    assert!(body.assigned_user_id.is_none());
}
