use super::*;
use time::macros::date;

fn sample_task(status: TaskStatus, assigned_user_id: Uuid) -> TaskRow {
    TaskRow {
        id: Uuid::new_v4(),
        title: "Water tomatoes".into(),
        description: String::new(),
        due_date: date!(2025 - 07 - 01),
        priority: TaskPriority::Medium,
        status,
        assigned_user_id,
        plot_id: None,
        created_by: Uuid::new_v4(),
        assignee_name: "Alice".into(),
        assignee_email: "alice@example.com".into(),
        plot_location: None,
    }
}

// =============================================================================
// TaskStatus / TaskPriority
// =============================================================================

#[test]
fn task_status_round_trips_through_str() {
    for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
        assert_eq!(TaskStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn task_status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"in_progress\"");
}

#[test]
fn task_status_from_str_rejects_unknown() {
    assert_eq!(TaskStatus::from_str("done"), None);
}

#[test]
fn task_priority_round_trips_through_str() {
    for priority in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
        assert_eq!(TaskPriority::from_str(priority.as_str()), Some(priority));
    }
}

#[test]
fn task_priority_from_str_rejects_unknown() {
    assert_eq!(TaskPriority::from_str("urgent"), None);
}

// =============================================================================
// TaskFilter
// =============================================================================

#[test]
fn task_filter_from_str_accepts_original_page_names() {
    assert_eq!(TaskFilter::from_str("all"), Some(TaskFilter::All));
    assert_eq!(TaskFilter::from_str("mine"), Some(TaskFilter::Mine));
    assert_eq!(TaskFilter::from_str("my-tasks"), Some(TaskFilter::Mine));
    assert_eq!(TaskFilter::from_str("pending"), Some(TaskFilter::Pending));
    assert_eq!(TaskFilter::from_str("completed"), Some(TaskFilter::Completed));
    assert_eq!(TaskFilter::from_str("overdue"), None);
}

#[test]
fn task_filter_defaults_to_all() {
    assert_eq!(TaskFilter::default(), TaskFilter::All);
}

// =============================================================================
// matches_filter
// =============================================================================

#[test]
fn filter_all_matches_everything() {
    let task = sample_task(TaskStatus::Completed, Uuid::new_v4());
    assert!(matches_filter(&task, TaskFilter::All, Uuid::new_v4()));
}

#[test]
fn filter_mine_matches_only_assignee() {
    let me = Uuid::new_v4();
    let mine = sample_task(TaskStatus::Pending, me);
    let other = sample_task(TaskStatus::Pending, Uuid::new_v4());
    assert!(matches_filter(&mine, TaskFilter::Mine, me));
    assert!(!matches_filter(&other, TaskFilter::Mine, me));
}

#[test]
fn filter_pending_includes_in_progress() {
    let caller = Uuid::new_v4();
    assert!(matches_filter(&sample_task(TaskStatus::Pending, caller), TaskFilter::Pending, caller));
    assert!(matches_filter(&sample_task(TaskStatus::InProgress, caller), TaskFilter::Pending, caller));
    assert!(!matches_filter(&sample_task(TaskStatus::Completed, caller), TaskFilter::Pending, caller));
}

#[test]
fn filter_completed_excludes_open_work() {
    let caller = Uuid::new_v4();
    assert!(matches_filter(&sample_task(TaskStatus::Completed, caller), TaskFilter::Completed, caller));
    assert!(!matches_filter(&sample_task(TaskStatus::Pending, caller), TaskFilter::Completed, caller));
}

// =============================================================================
// to_row
// =============================================================================

#[test]
fn to_row_defaults_unknown_enum_text() {
    let row = to_row((
        Uuid::nil(),
        "Weed section A".into(),
        String::new(),
        date!(2025 - 07 - 01),
        "bogus".into(),
        "bogus".into(),
        Uuid::nil(),
        None,
        Uuid::nil(),
        "Alice".into(),
        "alice@example.com".into(),
        None,
    ));
    assert_eq!(row.priority, TaskPriority::Medium);
    assert_eq!(row.status, TaskStatus::Pending);
}

#[test]
fn task_row_serializes_due_date_as_iso() {
    let task = sample_task(TaskStatus::Pending, Uuid::nil());
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["due_date"], "2025-07-01");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["priority"], "medium");
}
