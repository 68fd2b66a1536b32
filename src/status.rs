use chrono::{Local, NaiveDate, NaiveTime};
use crate::models::Todo;

/// Completion summary for a single calendar date.
///
/// A date where everything is done (`total == completed > 0`) is a
/// different state from a date with nothing scheduled (`is_empty`);
/// consumers color the two differently even though neither is overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStatus {
    /// Number of to-dos due on the date.
    pub total: usize,
    /// How many of those are completed.
    pub completed: usize,
    /// True when the date is strictly in the past and work on it is
    /// unfinished. A future date or today is never overdue.
    pub has_overdue: bool,
    /// True when nothing is due on the date.
    pub is_empty: bool,
}

/// Computes the completion summary for `date` over the full to-do
/// collection.
///
/// Matching is by due date only; the current local date decides whether
/// unfinished work counts as overdue. Linear scan, cheap enough to call
/// once per rendered calendar cell.
pub fn date_status(date: NaiveDate, todos: &[Todo]) -> DateStatus {
    let today = Local::now().date_naive();
    let total = todos.iter().filter(|t| t.due_date == date).count();
    let completed = todos
        .iter()
        .filter(|t| t.due_date == date && t.completed)
        .count();
    let has_overdue = date < today && completed < total && total > 0;
    DateStatus {
        total,
        completed,
        has_overdue,
        is_empty: total == 0,
    }
}

/// Whether a single to-do is past due right now.
///
/// A to-do without a time is due at the end of its day (23:59); completed
/// to-dos are never overdue.
pub fn todo_overdue(todo: &Todo) -> bool {
    if todo.completed {
        return false;
    }
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
    let due = todo.due_date.and_time(todo.due_time.unwrap_or(end_of_day));
    due < Local::now().naive_local()
}

/// One-line summary of a date's status, as shown under the calendar.
pub fn status_message(status: &DateStatus) -> String {
    let remaining = status.total - status.completed;
    if status.is_empty {
        "Nothing scheduled".to_string()
    } else if remaining == 0 {
        "All to-dos completed".to_string()
    } else if status.has_overdue {
        format!("{} to-do(s) overdue", remaining)
    } else {
        format!("{} to-do(s) remaining", remaining)
    }
}
