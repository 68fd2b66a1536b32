//! # Lifetrack
//!
//! A terminal life tracker written in Rust: a to-do list with categories, a
//! month calendar that summarizes each day's progress, and a small set of
//! preferences. Lifetrack combines a scriptable CLI with a TUI (Terminal
//! User Interface) session for interactive use.
//!
//! ## Features
//!
//! *   **Calendar overview**: every day is colored by its completion
//!     status — done, overdue, partially done, or still pending.
//! *   **Filtering**: the visible list is scoped to a date and narrowed by
//!     completion state and category, with incomplete and timed items
//!     sorted first.
//! *   **Categories**: four built-in categories (work, personal, health,
//!     learning) plus user-defined ones with a color and an icon.
//!     Removing a category moves its to-dos to `personal`.
//! *   **Dual interface**: quick one-shot CLI commands, or an interactive
//!     dashboard (`lifetrack` with no arguments).
//! *   **Font size preference**: the one durable setting, stored as JSON
//!     in the standard XDG data directory.
//!
//! ## Usage
//!
//! ### Interactive mode (TUI)
//!
//! ```bash
//! lifetrack
//! # or explicitly
//! lifetrack ui
//! ```
//!
//! #### TUI key bindings
//!
//! **Global**
//! *   `q`: Quit
//! *   `v`: Switch between To-dos and Categories
//! *   `F`: Cycle the font size (saved immediately)
//!
//! **To-dos view**
//! *   `h`/`l` or `←`/`→`: Previous / next day
//! *   `j`/`k` or `↓`/`↑`: Move the to-do selection
//! *   `n` / `p`: Next / previous month
//! *   `t`: Jump to today
//! *   `Space`: Toggle the selected to-do
//! *   `f`: Cycle the completion filter (all / active / completed)
//! *   `c`: Cycle the category filter
//! *   `a`: Add a to-do on the selected date
//!
//! **Categories view**
//! *   `a`: Add a category
//! *   `e`: Rename the selected category
//! *   `d`: Remove the selected category (default categories refuse)
//!
//! ### Command line interface (CLI)
//!
//! ```bash
//! # What's on for today
//! lifetrack list
//! lifetrack status
//!
//! # A specific date, only what's still open, one category
//! lifetrack list --date 2025-07-20 --filter active --category work
//!
//! # Add and complete to-dos
//! lifetrack add "Write report" --category work --date 2025-07-21 --time 14:00 --priority high
//! lifetrack toggle <ID>
//!
//! # Month overview
//! lifetrack calendar --month 2025-07
//!
//! # Categories
//! lifetrack category list
//! lifetrack category add "Garden" --color green --icon home
//!
//! # Preferences
//! lifetrack prefs
//! lifetrack prefs set large
//! ```
//!
//! ## Data
//!
//! To-dos and categories live in memory for the length of a session; each
//! run starts from the seeded demo state. The font size preference is the
//! only thing saved, at:
//! *   Linux: `~/.local/share/lifetrack/prefs.json`
//! *   macOS: `~/Library/Application Support/lifetrack/prefs.json`
//! *   Windows: `%APPDATA%\lifetrack\prefs.json`
//!
//! Override the location with the `LIFETRACK_PREFS` environment variable.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use lifetrack::commands::*;
use lifetrack::store::Tracker;
use lifetrack::tui::run_tui;

#[derive(Parser)]
#[command(name = "lifetrack")]
#[command(about = "Terminal life tracker with to-dos, categories and a calendar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List to-dos for a date
    List {
        /// Date in YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Completion filter (all, active, completed)
        #[arg(short, long)]
        filter: Option<String>,
        /// Only show one category (by id)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the completion summary for a date
    Status {
        /// Date in YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Add a new to-do
    Add {
        /// To-do title (quoted if it has spaces)
        title: String,
        /// Category id
        #[arg(short, long)]
        category: String,
        /// Due date in YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Due time in HH:MM, 5-minute steps
        #[arg(short, long)]
        time: Option<String>,
        /// Priority (high, medium, low)
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Toggle completion of a to-do
    Toggle {
        id: String,
    },
    /// Render the month calendar
    Calendar {
        /// Month in YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        command: Option<PrefsCommands>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive TUI
    Ui,
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Palette color (blue, green, red, purple, yellow, orange)
        #[arg(short, long)]
        color: Option<String>,
        /// Icon key (briefcase, home, heart, book-open, ...)
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// List categories
    List,
    /// Edit a category
    Edit {
        /// Category id
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// Remove a category (its to-dos move to 'personal')
    Remove {
        /// Category id
        id: String,
    },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Show the current preferences
    Show,
    /// Set the font size (small, medium, large, extra-large)
    Set {
        size: String,
    },
    /// Reset preferences to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut tracker = Tracker::seeded();
    match cli.command {
        Some(Commands::List { date, filter, category }) => cmd_list(&tracker, date, filter, category),
        Some(Commands::Status { date }) => cmd_status(&tracker, date),
        Some(Commands::Add { title, category, date, time, priority }) => {
            cmd_add(&mut tracker, title, category, date, time, priority, false);
        }
        Some(Commands::Toggle { id }) => cmd_toggle(&mut tracker, id, false),
        Some(Commands::Calendar { month }) => cmd_calendar(&tracker, month),
        Some(Commands::Category { command }) => match command {
            CategoryCommands::Add { name, color, icon } => cmd_category_add(&mut tracker, name, color, icon, false),
            CategoryCommands::List => cmd_category_list(&tracker),
            CategoryCommands::Edit { id, name, color, icon } => cmd_category_edit(&mut tracker, id, name, color, icon, false),
            CategoryCommands::Remove { id } => cmd_category_remove(&mut tracker, id, false),
        },
        Some(Commands::Prefs { command }) => match command {
            Some(PrefsCommands::Show) | None => cmd_prefs_show(),
            Some(PrefsCommands::Set { size }) => cmd_prefs_set(size, false),
            Some(PrefsCommands::Reset { force }) => cmd_prefs_reset(force),
        },
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "lifetrack", &mut io::stdout());
        }
        Some(Commands::Ui) | None => {
            if let Err(e) = run_tui() {
                eprintln!("Error running TUI: {}", e);
            }
        }
    }
}
