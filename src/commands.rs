use std::io::{self, Write};
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use crate::models::{CategoryColor, CategoryIcon, CompletionFilter, FontSize, Priority};
use crate::pipeline::visible_todos;
use crate::prefs::{delete_prefs, load_prefs, save_prefs, Prefs};
use crate::status::{date_status, status_message, todo_overdue};
use crate::store::{CategoryPatch, NewTodo, Tracker, FALLBACK_CATEGORY};

/// Maps a stored color key to a terminal color, falling back to gray for
/// anything outside the palette.
fn palette_color(key: &str) -> Color {
    match CategoryColor::from_key(key) {
        Some(CategoryColor::Blue) => Color::Blue,
        Some(CategoryColor::Green) => Color::Green,
        Some(CategoryColor::Red) => Color::Red,
        Some(CategoryColor::Purple) => Color::Magenta,
        Some(CategoryColor::Yellow) => Color::Yellow,
        Some(CategoryColor::Orange) => Color::DarkYellow,
        None => Color::Grey,
    }
}

/// Parses an optional `YYYY-MM-DD` argument, defaulting to today.
fn parse_date_arg(date: Option<&str>, silent: bool) -> Option<NaiveDate> {
    match date {
        None => Some(Local::now().date_naive()),
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(e) => {
                if !silent { eprintln!("Invalid date '{}': {}. Use YYYY-MM-DD.", s, e); }
                None
            }
        },
    }
}

/// Parses an `HH:MM` argument at 5-minute granularity.
fn parse_time_arg(time: &str, silent: bool) -> Option<NaiveTime> {
    let t = match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => t,
        Err(e) => {
            if !silent { eprintln!("Invalid time '{}': {}. Use HH:MM.", time, e); }
            return None;
        }
    };
    if t.minute() % 5 != 0 {
        if !silent { eprintln!("Invalid time '{}': minutes must be a multiple of 5.", time); }
        return None;
    }
    Some(t)
}

/// Lists the to-dos visible for a date under the given filters.
pub fn cmd_list(tracker: &Tracker, date: Option<String>, filter: Option<String>, category: Option<String>) {
    let date = match parse_date_arg(date.as_deref(), false) {
        Some(d) => d,
        None => return,
    };
    let filter = match filter.as_deref() {
        None => CompletionFilter::All,
        Some(key) => match CompletionFilter::from_key(key) {
            Some(f) => f,
            None => {
                eprintln!("Unknown filter '{}'. Use all, active or completed.", key);
                return;
            }
        },
    };
    let category = match category.as_deref() {
        None | Some("all") => None,
        Some(id) => {
            if tracker.category(id).is_none() {
                eprintln!("Category '{}' not found. See 'category list'.", id);
                return;
            }
            Some(id.to_string())
        }
    };

    let todos = visible_todos(tracker.todos(), date, filter, category.as_deref());
    let status = date_status(date, tracker.todos());
    if todos.is_empty() {
        println!("No to-dos for {}.", date);
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Done").add_attribute(Attribute::Bold),
            Cell::new("Time").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
        ]);

    for t in &todos {
        let overdue = todo_overdue(t);
        let time_str = t.due_time.map(|time| time.format("%H:%M").to_string()).unwrap_or_else(|| "-".to_string());
        let title_color = if t.completed {
            Color::Grey
        } else if overdue {
            Color::Red
        } else {
            Color::Reset
        };
        let (category_name, category_color) = match tracker.category(&t.category_id) {
            Some(c) => (c.name.clone(), palette_color(&c.color)),
            None => (t.category_id.clone(), Color::Grey),
        };
        let priority_color = match t.priority {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Green,
        };

        table.add_row(vec![
            Cell::new(if t.completed { "x" } else { "" }),
            Cell::new(time_str).fg(if overdue { Color::Red } else { Color::Reset }),
            Cell::new(&t.title).fg(title_color),
            Cell::new(category_name).fg(category_color),
            Cell::new(t.priority.label()).fg(priority_color),
        ]);
    }

    println!("{table}");
    println!("{}", status_message(&status));
}

/// Prints the completion summary for a date.
pub fn cmd_status(tracker: &Tracker, date: Option<String>) {
    let date = match parse_date_arg(date.as_deref(), false) {
        Some(d) => d,
        None => return,
    };
    let status = date_status(date, tracker.todos());
    println!("{}: {}/{} completed", date, status.completed, status.total);
    println!("{}", status_message(&status));
}

/// Adds a new to-do to the session.
pub fn cmd_add(
    tracker: &mut Tracker,
    title: String,
    category: String,
    date: Option<String>,
    time: Option<String>,
    priority: Option<String>,
    silent: bool,
) {
    let due_date = match parse_date_arg(date.as_deref(), silent) {
        Some(d) => d,
        None => return,
    };
    let due_time = match time {
        None => None,
        Some(s) => match parse_time_arg(&s, silent) {
            Some(t) => Some(t),
            None => return,
        },
    };
    let priority = match priority.as_deref() {
        None => Priority::default(),
        Some(key) => match Priority::from_key(key) {
            Some(p) => p,
            None => {
                if !silent { eprintln!("Unknown priority '{}'. Use high, medium or low.", key); }
                return;
            }
        },
    };
    if tracker.category(&category).is_none() {
        if !silent { eprintln!("Category '{}' not found. See 'category list'.", category); }
        return;
    }

    match tracker.add_todo(NewTodo {
        title,
        priority,
        category_id: category,
        due_date,
        due_time,
    }) {
        Some(id) => {
            if !silent { println!("To-do added (id = {})", id); }
        }
        None => {
            if !silent { eprintln!("Title must not be empty."); }
        }
    }
}

/// Toggles completion of a to-do by id.
pub fn cmd_toggle(tracker: &mut Tracker, id: String, silent: bool) {
    if tracker.toggle_todo(&id) {
        if !silent {
            let done = tracker.todo(&id).map(|t| t.completed).unwrap_or(false);
            println!("To-do {} marked as {}.", id, if done { "done" } else { "pending" });
        }
    } else {
        if !silent { eprintln!("To-do {} not found.", id); }
    }
}

/// Adds a new category.
pub fn cmd_category_add(tracker: &mut Tracker, name: String, color: Option<String>, icon: Option<String>, silent: bool) {
    let color = color.unwrap_or_else(|| "blue".to_string());
    let icon = icon.unwrap_or_else(|| "briefcase".to_string());
    match tracker.add_category(&name, &color, &icon) {
        Some(id) => {
            if !silent { println!("Category '{}' added (id = {})", name, id); }
        }
        None => {
            if !silent { eprintln!("Category name must not be empty."); }
        }
    }
}

/// Lists all categories in a formatted table.
pub fn cmd_category_list(tracker: &Tracker) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            Cell::new("").add_attribute(Attribute::Bold),
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Color").add_attribute(Attribute::Bold),
            Cell::new("Default").add_attribute(Attribute::Bold),
        ]);
    for c in tracker.categories() {
        table.add_row(vec![
            Cell::new(CategoryIcon::from_key(&c.icon).glyph()),
            Cell::new(&c.id),
            Cell::new(&c.name),
            Cell::new(&c.color).fg(palette_color(&c.color)),
            Cell::new(if Tracker::is_protected(&c.id) { "yes" } else { "" }),
        ]);
    }
    println!("{table}");
}

/// Edits an existing category's details.
pub fn cmd_category_edit(
    tracker: &mut Tracker,
    id: String,
    name: Option<String>,
    color: Option<String>,
    icon: Option<String>,
    silent: bool,
) {
    let patch = CategoryPatch { name, color, icon };
    if tracker.update_category(&id, patch) {
        if !silent { println!("Category '{}' updated.", id); }
    } else {
        if !silent { eprintln!("Category '{}' not found.", id); }
    }
}

/// Removes a category and moves its to-dos to the fallback category.
pub fn cmd_category_remove(tracker: &mut Tracker, id: String, silent: bool) {
    if Tracker::is_protected(&id) {
        if !silent { eprintln!("Category '{}' is a default category and cannot be removed.", id); }
        return;
    }
    if tracker.delete_category(&id) {
        if !silent { println!("Category '{}' removed. Its to-dos moved to '{}'.", id, FALLBACK_CATEGORY); }
    } else {
        if !silent { eprintln!("Category '{}' not found.", id); }
    }
}

/// Renders the month calendar with per-day completion counts.
///
/// Cell colors follow the date status: green when everything is done, red
/// when past work is unfinished, yellow when partially done, blue when
/// untouched, gray when nothing is scheduled.
pub fn cmd_calendar(tracker: &Tracker, month: Option<String>) {
    let first = match month {
        None => {
            let today = Local::now().date_naive();
            NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap()
        }
        Some(s) => match NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Invalid month '{}': {}. Use YYYY-MM.", s, e);
                return;
            }
        },
    };
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1).unwrap()
    };
    let days_in_month = next_month.signed_duration_since(first).num_days();
    let offset = first.weekday().num_days_from_sunday() as i64;
    let today = Local::now().date_naive();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    for week in 0..6 {
        let mut row: Vec<Cell> = Vec::with_capacity(7);
        for dow in 0..7 {
            let day = week * 7 + dow - offset + 1;
            if day < 1 || day > days_in_month {
                row.push(Cell::new(""));
                continue;
            }
            let date = NaiveDate::from_ymd_opt(first.year(), first.month(), day as u32).unwrap();
            let status = date_status(date, tracker.todos());
            let text = if status.is_empty {
                format!("{}", day)
            } else {
                format!("{} {}/{}", day, status.completed, status.total)
            };
            let color = if status.is_empty {
                Color::Grey
            } else if status.completed == status.total {
                Color::Green
            } else if status.has_overdue {
                Color::Red
            } else if status.completed > 0 {
                Color::Yellow
            } else {
                Color::Blue
            };
            let mut cell = Cell::new(text).fg(color);
            if date == today {
                cell = cell.add_attribute(Attribute::Bold);
            }
            row.push(cell);
        }
        table.add_row(row);
    }

    println!("{}", first.format("%B %Y"));
    println!("{table}");
}

/// Prints the current preferences.
pub fn cmd_prefs_show() {
    let prefs = load_prefs();
    println!(
        "Font size: {} ({}, x{})",
        prefs.font_size.label(),
        prefs.font_size.key(),
        prefs.font_size.multiplier()
    );
}

/// Changes the font size preference and writes it back immediately.
pub fn cmd_prefs_set(size: String, silent: bool) {
    let font_size = match FontSize::from_key(&size) {
        Some(f) => f,
        None => {
            if !silent { eprintln!("Unknown font size '{}'. Use small, medium, large or extra-large.", size); }
            return;
        }
    };
    let prefs = Prefs { font_size };
    if let Err(e) = save_prefs(&prefs) {
        if !silent { eprintln!("Failed to save preferences: {}", e); }
    } else {
        if !silent { println!("Font size set to {}.", font_size.label()); }
    }
}

/// Deletes the preferences file, restoring defaults.
pub fn cmd_prefs_reset(force: bool) {
    if !force {
        print!("Reset preferences to defaults? [y/N] ");
        io::stdout().flush().unwrap();
        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        if input.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return;
        }
    }
    if let Err(e) = delete_prefs() {
        eprintln!("Failed to reset preferences: {}", e);
    } else {
        println!("Preferences reset.");
    }
}
