use lifetrack::models::{CompletionFilter, Priority, Todo};
use lifetrack::pipeline::visible_todos;
use chrono::{NaiveDate, NaiveTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn todo(id: &str, due_date: NaiveDate, time: Option<(u32, u32)>, completed: bool, category_id: &str) -> Todo {
    Todo {
        id: id.into(),
        title: format!("Todo {}", id),
        completed,
        priority: Priority::Medium,
        category_id: category_id.into(),
        due_date,
        due_time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
        created_at: date(2025, 1, 15),
    }
}

fn ids(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_reference_ordering() {
    // Incomplete timed to-dos ascending by time, then the completed one.
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, Some((14, 0)), false, "work"),
        todo("2", day, Some((9, 0)), false, "health"),
        todo("3", day, None, true, "work"),
    ];

    let visible = visible_todos(&todos, day, CompletionFilter::All, None);
    assert_eq!(ids(&visible), vec!["2", "1", "3"]);
}

#[test]
fn test_untimed_sorts_after_timed_within_completion_state() {
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, None, false, "work"),
        todo("2", day, Some((22, 0)), false, "work"),
    ];

    let visible = visible_todos(&todos, day, CompletionFilter::All, None);
    assert_eq!(ids(&visible), vec!["2", "1"]);
}

#[test]
fn test_date_scoping() {
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, None, false, "work"),
        todo("2", date(2025, 7, 21), None, false, "work"),
        todo("3", date(2025, 7, 19), None, false, "work"),
    ];

    let visible = visible_todos(&todos, day, CompletionFilter::All, None);
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_completed_filter_is_a_subset_of_all() {
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, Some((14, 0)), false, "work"),
        todo("2", day, Some((9, 0)), true, "health"),
        todo("3", day, None, true, "work"),
    ];

    let all = visible_todos(&todos, day, CompletionFilter::All, None);
    let completed = visible_todos(&todos, day, CompletionFilter::Completed, None);

    assert!(completed.iter().all(|t| t.completed));
    let all_ids = ids(&all);
    assert!(completed.iter().all(|t| all_ids.contains(&t.id.as_str())));
}

#[test]
fn test_active_filter() {
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, None, false, "work"),
        todo("2", day, None, true, "work"),
    ];

    let visible = visible_todos(&todos, day, CompletionFilter::Active, None);
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_category_filter() {
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, Some((10, 0)), false, "work"),
        todo("2", day, Some((11, 0)), false, "health"),
    ];

    let visible = visible_todos(&todos, day, CompletionFilter::All, Some("health"));
    assert_eq!(ids(&visible), vec!["2"]);

    let none = visible_todos(&todos, day, CompletionFilter::All, Some("learning"));
    assert!(none.is_empty());
}

#[test]
fn test_repeated_calls_keep_the_same_order() {
    // Untimed to-dos compare equal; stability must keep their relative
    // order identical across calls on the same input.
    let day = date(2025, 7, 20);
    let todos = vec![
        todo("1", day, None, false, "work"),
        todo("2", day, None, false, "health"),
        todo("3", day, None, false, "learning"),
        todo("4", day, Some((8, 0)), false, "work"),
    ];

    let first = visible_todos(&todos, day, CompletionFilter::All, None);
    let second = visible_todos(&todos, day, CompletionFilter::All, None);
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first), vec!["4", "1", "2", "3"]);
}
