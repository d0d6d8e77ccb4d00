use super::*;
use time::macros::date;

#[test]
fn task_error_to_status_maps_not_found() {
    let err = task::TaskError::NotFound(Uuid::nil());
    assert_eq!(task_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn task_error_to_status_maps_forbidden() {
    assert_eq!(task_error_to_status(&task::TaskError::Forbidden), StatusCode::FORBIDDEN);
}

#[test]
fn create_body_description_defaults_empty() {
    let body: CreateTaskBody = serde_json::from_str(&format!(
        r#"{{"title":"Water tomatoes","due_date":"2025-07-01","assigned_user_id":"{}"}}"#,
        Uuid::nil()
    ))
    .unwrap();
    assert_eq!(body.title, "Water tomatoes");
    assert_eq!(body.description, "");
    assert_eq!(body.due_date, date!(2025 - 07 - 01));
    assert!(body.priority.is_none());
    assert!(body.plot_id.is_none());
}

#[test]
fn create_body_requires_assignee() {
    let result = serde_json::from_str::<CreateTaskBody>(r#"{"title":"Weed","due_date":"2025-07-01"}"#);
    assert!(result.is_err());
}

#[test]
fn update_status_body_is_plain_string() {
    let body: UpdateTaskStatusBody = serde_json::from_str(r#"{"status":"in_progress"}"#).unwrap();
    assert_eq!(body.status, "in_progress");
    assert_eq!(TaskStatus::from_str(&body.status), Some(TaskStatus::InProgress));
}

#[test]
fn update_body_all_fields_optional() {
    let body: UpdateTaskBody = serde_json::from_str("{}").unwrap();
    assert!(body.title.is_none());
    assert!(body.status.is_none());
    assert!(body.assigned_user_id.is_none());
}
