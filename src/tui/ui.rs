use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use chrono::{Datelike, Duration, Local, NaiveDate};
use crate::models::{CategoryColor, CategoryIcon};
use crate::status::{date_status, status_message, todo_overdue, DateStatus};
use crate::store::Tracker;
use super::app::{App, InputField, InputMode, ViewMode};

pub fn ui(f: &mut Frame, app: &mut App) {
    match app.view_mode {
        ViewMode::Todos => draw_todos(f, app),
        ViewMode::Categories => draw_categories(f, app),
    }

    // Render input box if needed
    match app.input_mode {
        InputMode::Editing | InputMode::Adding => {
            let area = centered_rect(60, 3, f.area());
            f.render_widget(Clear, area);

            let title = match app.input_mode {
                InputMode::Adding => match app.view_mode {
                    ViewMode::Todos => match app.add_todo.step {
                        0 => "Add To-do: Enter Title",
                        1 => "Add To-do: Enter Time (HH:MM, optional)",
                        2 => "Add To-do: Enter Priority (high/medium/low, Enter for medium)",
                        _ => "Add To-do",
                    },
                    ViewMode::Categories => match app.add_category.step {
                        0 => "Add Category: Enter Name",
                        1 => "Add Category: Enter Color (Enter for blue)",
                        2 => "Add Category: Enter Icon (Enter for briefcase)",
                        _ => "Add Category",
                    },
                },
                InputMode::Editing => match app.input_field {
                    InputField::CategoryName => "Rename Category",
                    _ => "Edit",
                },
                _ => "",
            };

            let input = Paragraph::new(app.input_buffer.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title(title));

            f.render_widget(input, area);
        }
        _ => {}
    }
}

fn draw_todos(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Calendar
            Constraint::Length(3),  // Status line
            Constraint::Min(0),     // Table
            Constraint::Length(3),  // Help
        ].as_ref())
        .split(f.area());

    draw_calendar(f, app, chunks[0]);

    let today = Local::now().date_naive();
    let status = date_status(app.selected_date, app.tracker.todos());
    let status_style = if status.has_overdue {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    let status_line = Paragraph::new(format!(
        "{} — {}",
        format_selected_date(app.selected_date, today),
        status_message(&status)
    ))
    .style(status_style)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_line, chunks[1]);

    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|t| {
            let overdue = todo_overdue(t);
            let style = if t.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else if overdue {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            let category_name = app
                .tracker
                .category(&t.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| t.category_id.clone());
            Row::new(vec![
                Cell::from(if t.completed { "x" } else { "" }),
                Cell::from(t.due_time.map(|time| time.format("%H:%M").to_string()).unwrap_or_else(|| "-".to_string())),
                Cell::from(t.title.clone()),
                Cell::from(category_name),
                Cell::from(t.priority.label()),
            ]).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(10),
    ];

    let category_label = match &app.category_filter {
        None => "All".to_string(),
        Some(id) => app
            .tracker
            .category(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.clone()),
    };
    let title = format!("Lifetrack - To-dos [{} / {}]", app.filter.label(), category_label);

    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Done", "Time", "Title", "Category", "Priority"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .bottom_margin(1))
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, chunks[2], &mut app.state);

    let help_text = match app.input_mode {
        InputMode::Normal => "q: Quit | h/l: Day | j/k: Select | n/p: Month | t: Today | Space: Toggle | f: Filter | c: Category | a: Add | F: Font | v: Categories",
        InputMode::Editing => "Enter: Save | Esc: Cancel",
        InputMode::Adding => "Enter: Next Step | Esc: Cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Draws the month grid. Each in-month cell shows the day number and, when
/// something is due, its completed/total counts, colored by date status.
fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let today = Local::now().date_naive();
    let first = app.month;
    let offset = first.weekday().num_days_from_sunday() as i64;
    let cell_width = (7.0 * app.prefs.font_size.multiplier()).round() as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(7);
    let header: Vec<Span> = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|d| Span::styled(pad_center(d, cell_width), Style::default().fg(Color::Gray)))
        .collect();
    lines.push(Line::from(header));

    for week in 0..6 {
        let mut spans: Vec<Span> = Vec::with_capacity(7);
        for dow in 0..7 {
            let date = first + Duration::days(week * 7 + dow - offset);
            let in_month = date.month() == first.month() && date.year() == first.year();
            if !in_month {
                spans.push(Span::styled(
                    pad_center(&date.day().to_string(), cell_width),
                    Style::default().fg(Color::DarkGray),
                ));
                continue;
            }
            let status = date_status(date, app.tracker.todos());
            let text = if status.is_empty {
                date.day().to_string()
            } else {
                format!("{} {}/{}", date.day(), status.completed, status.total)
            };
            let mut style = Style::default().fg(status_color(&status));
            if date == today {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if date == app.selected_date {
                style = Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(pad_center(&text, cell_width), style));
        }
        lines.push(Line::from(spans));
    }

    let calendar = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(first.format("%B %Y").to_string()));
    f.render_widget(calendar, area);
}

fn draw_categories(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Help
        ].as_ref())
        .split(f.area());

    let rows: Vec<Row> = app
        .tracker
        .categories()
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(CategoryIcon::from_key(&c.icon).glyph()),
                Cell::from(c.id.clone()),
                Cell::from(c.name.clone()),
                Cell::from(c.color.clone()).style(Style::default().fg(palette_color(&c.color))),
                Cell::from(if Tracker::is_protected(&c.id) { "yes" } else { "" }),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(16),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(Row::new(vec!["", "ID", "Name", "Color", "Default"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .bottom_margin(1))
        .block(Block::default().borders(Borders::ALL).title("Lifetrack - Categories"))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, chunks[0], &mut app.category_state);

    let help_text = match app.input_mode {
        InputMode::Normal => "q: Quit | j/k: Select | a: Add | e: Rename | d: Delete | F: Font | v: To-dos",
        InputMode::Editing => "Enter: Save | Esc: Cancel",
        InputMode::Adding => "Enter: Next Step | Esc: Cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

/// Calendar cell color for a date's status. Selected/today markers are
/// layered on top by the caller.
fn status_color(status: &DateStatus) -> Color {
    if status.is_empty {
        Color::DarkGray
    } else if status.completed == status.total {
        Color::Green
    } else if status.has_overdue {
        Color::Red
    } else if status.completed > 0 {
        Color::Yellow
    } else {
        Color::Blue
    }
}

/// Maps a stored color key to a terminal color, gray for anything outside
/// the palette.
fn palette_color(key: &str) -> Color {
    match CategoryColor::from_key(key) {
        Some(CategoryColor::Blue) => Color::Blue,
        Some(CategoryColor::Green) => Color::Green,
        Some(CategoryColor::Red) => Color::Red,
        Some(CategoryColor::Purple) => Color::Magenta,
        Some(CategoryColor::Yellow) => Color::Yellow,
        Some(CategoryColor::Orange) => Color::LightRed,
        None => Color::Gray,
    }
}

/// Relative label for the selected date, falling back to a short date.
fn format_selected_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

fn pad_center(s: &str, width: usize) -> String {
    let s: String = s.chars().take(width).collect();
    format!("{:^width$}", s, width = width)
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height - height) / 2),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
