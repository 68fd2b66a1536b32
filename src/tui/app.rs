use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Timelike};
use ratatui::widgets::TableState;
use crate::models::{CompletionFilter, Priority, Todo};
use crate::pipeline::visible_todos;
use crate::prefs::{load_prefs, save_prefs, Prefs};
use crate::store::{CategoryPatch, NewTodo, Tracker, FALLBACK_CATEGORY};

#[derive(PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    Adding,
}

pub enum ViewMode {
    Todos,
    Categories,
}

pub enum InputField {
    None,
    CategoryName,
}

/// State for the multi-step "Add To-do" wizard.
#[derive(Default)]
pub struct AddTodoState {
    pub title: String,
    pub time: Option<NaiveTime>,
    pub step: usize, // 0: Title, 1: Time, 2: Priority
}

/// State for the multi-step "Add Category" wizard.
#[derive(Default)]
pub struct AddCategoryState {
    pub name: String,
    pub color: String,
    pub step: usize, // 0: Name, 1: Color, 2: Icon
}

pub struct App {
    pub tracker: Tracker,
    pub prefs: Prefs,
    /// Date whose to-dos are listed.
    pub selected_date: NaiveDate,
    /// First day of the month shown in the calendar pane.
    pub month: NaiveDate,
    pub filter: CompletionFilter,
    pub category_filter: Option<String>,
    /// Pipeline output for the selected date under the active filters.
    pub visible: Vec<Todo>,
    pub state: TableState,
    pub category_state: TableState,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub input_field: InputField,
    pub input_buffer: String,
    pub target_id: Option<String>,
    pub add_todo: AddTodoState,
    pub add_category: AddCategoryState,
}

impl App {
    /// Creates a new App instance with the seeded session and saved
    /// preferences.
    pub fn new() -> App {
        let today = Local::now().date_naive();
        let mut app = App {
            tracker: Tracker::seeded(),
            prefs: load_prefs(),
            selected_date: today,
            month: first_of_month(today),
            filter: CompletionFilter::All,
            category_filter: None,
            visible: Vec::new(),
            state: TableState::default(),
            category_state: TableState::default(),
            view_mode: ViewMode::Todos,
            input_mode: InputMode::Normal,
            input_field: InputField::None,
            input_buffer: String::new(),
            target_id: None,
            add_todo: AddTodoState::default(),
            add_category: AddCategoryState::default(),
        };
        app.category_state.select(Some(0));
        app.reload();
        app
    }

    /// Recomputes the visible list and keeps both selections in bounds.
    pub fn reload(&mut self) {
        self.visible = visible_todos(
            self.tracker.todos(),
            self.selected_date,
            self.filter,
            self.category_filter.as_deref(),
        );

        if self.visible.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.visible.len() {
                self.state.select(Some(self.visible.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }

        let categories = self.tracker.categories().len();
        if categories == 0 {
            self.category_state.select(None);
        } else if let Some(i) = self.category_state.selected() {
            if i >= categories {
                self.category_state.select(Some(categories - 1));
            }
        } else {
            self.category_state.select(Some(0));
        }
    }

    /// Selects the next item in the current list.
    pub fn next(&mut self) {
        match self.view_mode {
            ViewMode::Todos => {
                if self.visible.is_empty() { return; }
                let i = match self.state.selected() {
                    Some(i) => {
                        if i >= self.visible.len() - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.state.select(Some(i));
            }
            ViewMode::Categories => {
                let len = self.tracker.categories().len();
                if len == 0 { return; }
                let i = match self.category_state.selected() {
                    Some(i) => {
                        if i >= len - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.category_state.select(Some(i));
            }
        }
    }

    /// Selects the previous item in the current list.
    pub fn previous(&mut self) {
        match self.view_mode {
            ViewMode::Todos => {
                if self.visible.is_empty() { return; }
                let i = match self.state.selected() {
                    Some(i) => {
                        if i == 0 {
                            self.visible.len() - 1
                        } else {
                            i - 1
                        }
                    }
                    None => 0,
                };
                self.state.select(Some(i));
            }
            ViewMode::Categories => {
                let len = self.tracker.categories().len();
                if len == 0 { return; }
                let i = match self.category_state.selected() {
                    Some(i) => {
                        if i == 0 {
                            len - 1
                        } else {
                            i - 1
                        }
                    }
                    None => 0,
                };
                self.category_state.select(Some(i));
            }
        }
    }

    /// Moves the selected date by a number of days, following the calendar
    /// into the new month when needed.
    pub fn select_date_offset(&mut self, days: i64) {
        if let ViewMode::Categories = self.view_mode { return; }
        self.selected_date += Duration::days(days);
        self.month = first_of_month(self.selected_date);
        self.reload();
    }

    /// Shifts the calendar pane a month forward or back. The selected
    /// date stays put.
    pub fn change_month(&mut self, months: i32) {
        if let ViewMode::Categories = self.view_mode { return; }
        let total = self.month.year() * 12 + self.month.month0() as i32 + months;
        let year = total.div_euclid(12);
        let month0 = total.rem_euclid(12) as u32;
        if let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
            self.month = first;
        }
    }

    /// Jumps the calendar and selection back to today.
    pub fn goto_today(&mut self) {
        if let ViewMode::Categories = self.view_mode { return; }
        let today = Local::now().date_naive();
        self.selected_date = today;
        self.month = first_of_month(today);
        self.reload();
    }

    /// Flips completion of the selected to-do.
    pub fn toggle_selected(&mut self) {
        if let ViewMode::Categories = self.view_mode { return; }
        if let Some(i) = self.state.selected() {
            if i < self.visible.len() {
                let id = self.visible[i].id.clone();
                self.tracker.toggle_todo(&id);
                self.reload();
            }
        }
    }

    /// Cycles the completion filter (all -> active -> completed).
    pub fn cycle_filter(&mut self) {
        if let ViewMode::Categories = self.view_mode { return; }
        self.filter = self.filter.next();
        self.reload();
    }

    /// Cycles the category filter through all categories and back to "all".
    pub fn cycle_category_filter(&mut self) {
        if let ViewMode::Categories = self.view_mode { return; }
        let ids: Vec<String> = self.tracker.categories().iter().map(|c| c.id.clone()).collect();
        self.category_filter = match &self.category_filter {
            None => ids.first().cloned(),
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(i) if i + 1 < ids.len() => Some(ids[i + 1].clone()),
                _ => None,
            },
        };
        self.reload();
    }

    /// Cycles the font size preference and saves it immediately.
    pub fn cycle_font_size(&mut self) {
        self.prefs.font_size = self.prefs.font_size.next();
        let _ = save_prefs(&self.prefs);
    }

    /// Toggles between the To-dos and Categories views.
    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Todos => ViewMode::Categories,
            ViewMode::Categories => ViewMode::Todos,
        };
    }

    /// Starts the add wizard for the current view.
    pub fn start_add(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input_buffer.clear();
        match self.view_mode {
            ViewMode::Todos => self.add_todo = AddTodoState::default(),
            ViewMode::Categories => self.add_category = AddCategoryState::default(),
        }
    }

    /// Starts renaming the selected category.
    pub fn start_edit_name(&mut self) {
        if let ViewMode::Todos = self.view_mode { return; }
        if let Some(i) = self.category_state.selected() {
            if let Some(cat) = self.tracker.categories().get(i) {
                self.target_id = Some(cat.id.clone());
                self.input_buffer = cat.name.clone();
                self.input_mode = InputMode::Editing;
                self.input_field = InputField::CategoryName;
            }
        }
    }

    /// Removes the selected category. Default categories are silently kept,
    /// the same way the reference UI offers no delete action for them.
    pub fn delete_selected_category(&mut self) {
        if let ViewMode::Todos = self.view_mode { return; }
        if let Some(i) = self.category_state.selected() {
            if let Some(cat) = self.tracker.categories().get(i) {
                let id = cat.id.clone();
                if Tracker::is_protected(&id) {
                    return;
                }
                self.tracker.delete_category(&id);
                self.reload();
            }
        }
    }

    /// Handles text input based on the current mode.
    pub fn handle_input(&mut self) {
        match self.input_mode {
            InputMode::Adding => self.handle_adding_input(),
            InputMode::Editing => self.handle_editing_input(),
            _ => {}
        }
    }

    /// Handles input for the add wizards.
    fn handle_adding_input(&mut self) {
        match self.view_mode {
            ViewMode::Todos => {
                match self.add_todo.step {
                    0 => { // Title
                        if !self.input_buffer.trim().is_empty() {
                            self.add_todo.title = self.input_buffer.trim().to_string();
                            self.add_todo.step += 1;
                            self.input_buffer.clear();
                        }
                    }
                    1 => { // Time (optional, HH:MM at 5-minute steps)
                        if self.input_buffer.is_empty() {
                            self.add_todo.time = None;
                            self.add_todo.step += 1;
                        } else if let Ok(t) = NaiveTime::parse_from_str(&self.input_buffer, "%H:%M") {
                            if t.minute() % 5 == 0 {
                                self.add_todo.time = Some(t);
                                self.add_todo.step += 1;
                                self.input_buffer.clear();
                            }
                        }
                    }
                    2 => { // Priority (optional)
                        let priority = if self.input_buffer.is_empty() {
                            Some(Priority::default())
                        } else {
                            Priority::from_key(self.input_buffer.trim())
                        };
                        if let Some(priority) = priority {
                            let category_id = self
                                .category_filter
                                .clone()
                                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
                            self.tracker.add_todo(NewTodo {
                                title: self.add_todo.title.clone(),
                                priority,
                                category_id,
                                due_date: self.selected_date,
                                due_time: self.add_todo.time,
                            });
                            self.input_mode = InputMode::Normal;
                            self.input_buffer.clear();
                            self.reload();
                        }
                    }
                    _ => {}
                }
            }
            ViewMode::Categories => {
                match self.add_category.step {
                    0 => { // Name
                        if !self.input_buffer.trim().is_empty() {
                            self.add_category.name = self.input_buffer.trim().to_string();
                            self.add_category.step += 1;
                            self.input_buffer.clear();
                        }
                    }
                    1 => { // Color (empty -> blue)
                        self.add_category.color = if self.input_buffer.trim().is_empty() {
                            "blue".to_string()
                        } else {
                            self.input_buffer.trim().to_string()
                        };
                        self.add_category.step += 1;
                        self.input_buffer.clear();
                    }
                    2 => { // Icon (empty -> briefcase)
                        let icon = if self.input_buffer.trim().is_empty() {
                            "briefcase".to_string()
                        } else {
                            self.input_buffer.trim().to_string()
                        };
                        let name = self.add_category.name.clone();
                        let color = self.add_category.color.clone();
                        self.tracker.add_category(&name, &color, &icon);
                        self.input_mode = InputMode::Normal;
                        self.input_buffer.clear();
                        self.reload();
                    }
                    _ => {}
                }
            }
        }
    }

    /// Handles input for the rename mode.
    fn handle_editing_input(&mut self) {
        if let Some(id) = self.target_id.clone() {
            if let InputField::CategoryName = self.input_field {
                if !self.input_buffer.trim().is_empty() {
                    self.tracker.update_category(
                        &id,
                        CategoryPatch {
                            name: Some(self.input_buffer.trim().to_string()),
                            ..Default::default()
                        },
                    );
                }
            }
            self.input_mode = InputMode::Normal;
            self.input_field = InputField::None;
            self.input_buffer.clear();
            self.reload();
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}
