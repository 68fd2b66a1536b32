use std::cmp::Ordering;
use chrono::NaiveDate;
use crate::models::{CompletionFilter, Todo};

/// Produces the ordered, visible list of to-dos for one date.
///
/// Stages run in a fixed order: keep the date's to-dos, apply the
/// completion filter, apply the category filter (`None` keeps every
/// category), then sort. The sort is stable, so repeated calls over the
/// same input return the same order.
pub fn visible_todos(
    todos: &[Todo],
    date: NaiveDate,
    filter: CompletionFilter,
    category: Option<&str>,
) -> Vec<Todo> {
    let mut visible: Vec<Todo> = todos
        .iter()
        .filter(|t| t.due_date == date)
        .filter(|t| match filter {
            CompletionFilter::All => true,
            CompletionFilter::Active => !t.completed,
            CompletionFilter::Completed => t.completed,
        })
        .filter(|t| category.map_or(true, |c| t.category_id == c))
        .cloned()
        .collect();
    visible.sort_by(compare_todos);
    visible
}

/// Display order: incomplete before complete; within the same completion
/// state, timed before untimed, timed pairs ascending by time of day,
/// untimed pairs equal.
fn compare_todos(a: &Todo, b: &Todo) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (a.due_time, b.due_time) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
