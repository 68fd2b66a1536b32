use chrono::{Local, NaiveDate, NaiveTime};
use crate::models::{Category, Priority, Todo};

/// Category ids that ship with every session and cannot be removed.
pub const PROTECTED_CATEGORIES: [&str; 4] = ["work", "personal", "health", "learning"];

/// Category that adopts the to-dos of a removed category.
pub const FALLBACK_CATEGORY: &str = "personal";

/// Input for creating a to-do. Title, category and date are required;
/// time and priority are optional.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub priority: Priority,
    pub category_id: String,
    pub due_date: NaiveDate,
    pub due_time: Option<NaiveTime>,
}

/// Fields of a category that can change after creation. `None` leaves the
/// existing value untouched.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// The session-owned state: the category and to-do collections.
///
/// All mutation goes through the methods below; reads borrow the
/// collections directly. Nothing here is persisted — a session starts from
/// the seeded demo state and lives until the process exits.
pub struct Tracker {
    categories: Vec<Category>,
    todos: Vec<Todo>,
}

impl Tracker {
    /// Creates a tracker with the four default categories and no to-dos.
    pub fn new() -> Tracker {
        let categories = vec![
            category("work", "Work", "blue", "briefcase"),
            category("personal", "Personal", "green", "home"),
            category("health", "Health", "red", "heart"),
            category("learning", "Learning", "purple", "book-open"),
        ];
        Tracker { categories, todos: Vec::new() }
    }

    /// Creates a tracker pre-loaded with the demo to-dos.
    pub fn seeded() -> Tracker {
        let mut tracker = Tracker::new();
        tracker.todos = vec![
            demo_todo("1", "Draft the project proposal", false, Priority::High, "work", (2025, 7, 20), Some((14, 0)), (2025, 1, 15)),
            demo_todo("2", "Evening workout", true, Priority::Medium, "health", (2025, 7, 20), Some((18, 0)), (2025, 1, 15)),
            demo_todo("3", "Reading session", true, Priority::Low, "learning", (2025, 7, 19), None, (2025, 1, 14)),
            demo_todo("4", "Grocery run", false, Priority::Medium, "personal", (2025, 7, 18), Some((10, 30)), (2025, 1, 15)),
            demo_todo("5", "Language practice", false, Priority::Low, "learning", (2025, 7, 22), None, (2025, 1, 14)),
            demo_todo("6", "Prepare for the meeting", false, Priority::High, "work", (2025, 7, 21), Some((9, 0)), (2025, 1, 15)),
        ];
        tracker
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a to-do by id.
    pub fn todo(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Whether `id` names one of the default categories.
    pub fn is_protected(id: &str) -> bool {
        PROTECTED_CATEGORIES.contains(&id)
    }

    /// Flips the completion flag of the to-do with the given id.
    ///
    /// Returns false without changing anything when the id does not
    /// resolve; an unknown id is not an error.
    pub fn toggle_todo(&mut self, id: &str) -> bool {
        if let Some(t) = self.todos.iter_mut().find(|t| t.id == id) {
            t.completed = !t.completed;
            true
        } else {
            false
        }
    }

    /// Adds a to-do at the front of the collection (newest first) and
    /// returns its freshly assigned id.
    ///
    /// Returns `None` without changing anything when the title is blank
    /// after trimming.
    pub fn add_todo(&mut self, new: NewTodo) -> Option<String> {
        if new.title.trim().is_empty() {
            return None;
        }
        let id = fresh_id();
        let todo = Todo {
            id: id.clone(),
            title: new.title,
            completed: false,
            priority: new.priority,
            category_id: new.category_id,
            due_date: new.due_date,
            due_time: new.due_time,
            created_at: Local::now().date_naive(),
        };
        self.todos.insert(0, todo);
        Some(id)
    }

    /// Appends a category and returns its freshly assigned id.
    ///
    /// Returns `None` without changing anything when the name is blank
    /// after trimming.
    pub fn add_category(&mut self, name: &str, color: &str, icon: &str) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }
        let id = fresh_id();
        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        });
        Some(id)
    }

    /// Merges the patch into the category with the given id. Returns false
    /// when the id does not resolve. A blank name in the patch is ignored;
    /// names stay non-empty.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> bool {
        if let Some(cat) = self.categories.iter_mut().find(|c| c.id == id) {
            if let Some(name) = patch.name {
                if !name.trim().is_empty() {
                    cat.name = name;
                }
            }
            if let Some(color) = patch.color {
                cat.color = color;
            }
            if let Some(icon) = patch.icon {
                cat.icon = icon;
            }
            true
        } else {
            false
        }
    }

    /// Removes the category with the given id and moves every to-do that
    /// referenced it to the `personal` category, in one step — no to-do is
    /// ever left pointing at a removed category.
    ///
    /// Returns false for the protected default categories and for unknown
    /// ids.
    pub fn delete_category(&mut self, id: &str) -> bool {
        if Self::is_protected(id) {
            return false;
        }
        let len_before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == len_before {
            return false;
        }
        for t in self.todos.iter_mut() {
            if t.category_id == id {
                t.category_id = FALLBACK_CATEGORY.to_string();
            }
        }
        true
    }
}

impl Default for Tracker {
    fn default() -> Tracker {
        Tracker::new()
    }
}

/// Generates a session-unique id from the wall clock, millisecond
/// resolution. Collisions within one millisecond are not defended against.
fn fresh_id() -> String {
    Local::now().timestamp_millis().to_string()
}

fn category(id: &str, name: &str, color: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    }
}

fn demo_todo(
    id: &str,
    title: &str,
    completed: bool,
    priority: Priority,
    category_id: &str,
    due: (i32, u32, u32),
    time: Option<(u32, u32)>,
    created: (i32, u32, u32),
) -> Todo {
    Todo {
        id: id.to_string(),
        title: title.to_string(),
        completed,
        priority,
        category_id: category_id.to_string(),
        due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
        due_time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
        created_at: NaiveDate::from_ymd_opt(created.0, created.1, created.2).unwrap(),
    }
}
