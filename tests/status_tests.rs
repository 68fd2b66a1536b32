use lifetrack::models::{Priority, Todo};
use lifetrack::status::{date_status, status_message, todo_overdue};
use chrono::{Duration, Local, NaiveDate, NaiveTime};

fn todo_due(id: &str, due_date: NaiveDate, time: Option<(u32, u32)>, completed: bool) -> Todo {
    Todo {
        id: id.into(),
        title: "Test".into(),
        completed,
        priority: Priority::Medium,
        category_id: "work".into(),
        due_date,
        due_time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
        created_at: Local::now().date_naive(),
    }
}

#[test]
fn test_future_date_never_overdue() {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    let todos = vec![todo_due("1", tomorrow, None, false)];

    let status = date_status(tomorrow, &todos);
    assert_eq!(status.total, 1);
    assert_eq!(status.completed, 0);
    assert!(!status.has_overdue);
    assert!(!status.is_empty);
}

#[test]
fn test_today_never_overdue() {
    let today = Local::now().date_naive();
    let todos = vec![todo_due("1", today, None, false)];

    let status = date_status(today, &todos);
    assert!(!status.has_overdue);
}

#[test]
fn test_past_date_with_incomplete_work_is_overdue() {
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let todos = vec![
        todo_due("1", yesterday, None, false),
        todo_due("2", yesterday, None, true),
    ];

    let status = date_status(yesterday, &todos);
    assert_eq!(status.total, 2);
    assert_eq!(status.completed, 1);
    assert!(status.has_overdue);
}

#[test]
fn test_empty_date() {
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let todos: Vec<Todo> = Vec::new();

    let status = date_status(yesterday, &todos);
    assert!(status.is_empty);
    assert!(!status.has_overdue);
    assert_eq!(status.total, 0);
    assert_eq!(status.completed, 0);
}

#[test]
fn test_fully_completed_past_date_is_not_overdue() {
    // All done on a past date is a different state from nothing scheduled,
    // but neither counts as overdue.
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let todos = vec![todo_due("1", yesterday, Some((9, 0)), true)];

    let status = date_status(yesterday, &todos);
    assert!(!status.has_overdue);
    assert!(!status.is_empty);
    assert_eq!(status.completed, status.total);
    assert!(status.total > 0);
}

#[test]
fn test_counts_only_cover_the_requested_date() {
    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);
    let todos = vec![
        todo_due("1", today, None, false),
        todo_due("2", today, None, true),
        todo_due("3", tomorrow, None, false),
    ];

    let status = date_status(today, &todos);
    assert_eq!(status.total, 2);
    assert_eq!(status.completed, 1);
}

#[test]
fn test_status_messages() {
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);

    let empty = date_status(today, &[]);
    assert_eq!(status_message(&empty), "Nothing scheduled");

    let done = date_status(today, &[todo_due("1", today, None, true)]);
    assert_eq!(status_message(&done), "All to-dos completed");

    let overdue = date_status(yesterday, &[todo_due("1", yesterday, None, false)]);
    assert!(status_message(&overdue).contains("overdue"));

    let remaining = date_status(today, &[todo_due("1", today, None, false)]);
    assert!(status_message(&remaining).contains("remaining"));
}

#[test]
fn test_todo_overdue() {
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);
    let tomorrow = today + Duration::days(1);

    assert!(todo_overdue(&todo_due("1", yesterday, Some((9, 0)), false)));
    assert!(!todo_overdue(&todo_due("2", yesterday, Some((9, 0)), true)));
    assert!(!todo_overdue(&todo_due("3", tomorrow, None, false)));
}
