use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Represents a single to-do item in the tracker.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Todo {
    /// Unique identifier, generated from a millisecond timestamp at creation.
    pub id: String,
    /// The title of the to-do.
    pub title: String,
    /// Whether the to-do has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// Identifier of the category the to-do belongs to.
    pub category_id: String,
    /// The calendar date the to-do is due.
    pub due_date: NaiveDate,
    /// Optional time of day the to-do is due. Absent means the whole day.
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
    /// The calendar date the to-do was created.
    pub created_at: NaiveDate,
}

/// A grouping for to-dos, with display metadata.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    /// Unique identifier. The four default ids (`work`, `personal`,
    /// `health`, `learning`) are protected and cannot be removed.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Palette color key. Unrecognized keys render as gray.
    pub color: String,
    /// Icon key. Unrecognized keys render as the briefcase glyph.
    pub icon: String,
}

/// Priority of a to-do.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parses a priority key (`high`, `medium`, `low`).
    pub fn from_key(key: &str) -> Option<Priority> {
        match key {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Completion filter applied by the visible-list pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl CompletionFilter {
    /// Parses a filter key (`all`, `active`, `completed`).
    pub fn from_key(key: &str) -> Option<CompletionFilter> {
        match key {
            "all" => Some(CompletionFilter::All),
            "active" => Some(CompletionFilter::Active),
            "completed" => Some(CompletionFilter::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionFilter::All => "All",
            CompletionFilter::Active => "Active",
            CompletionFilter::Completed => "Completed",
        }
    }

    /// The next filter in the cycle order used by the TUI.
    pub fn next(&self) -> CompletionFilter {
        match self {
            CompletionFilter::All => CompletionFilter::Active,
            CompletionFilter::Active => CompletionFilter::Completed,
            CompletionFilter::Completed => CompletionFilter::All,
        }
    }
}

/// The fixed category color palette.
///
/// Category records store the color as a loose key so unrecognized values
/// stay representable; render code maps `from_key` misses to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryColor {
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
    Orange,
}

impl CategoryColor {
    /// Looks up a palette color by key. `None` means the caller should
    /// fall back to neutral gray.
    pub fn from_key(key: &str) -> Option<CategoryColor> {
        match key {
            "blue" => Some(CategoryColor::Blue),
            "green" => Some(CategoryColor::Green),
            "red" => Some(CategoryColor::Red),
            "purple" => Some(CategoryColor::Purple),
            "yellow" => Some(CategoryColor::Yellow),
            "orange" => Some(CategoryColor::Orange),
            _ => None,
        }
    }
}

/// The fixed category icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Briefcase,
    Home,
    Heart,
    BookOpen,
    Target,
    ShoppingBag,
    Plane,
    Coffee,
    Star,
    Zap,
    Car,
    Music,
    Camera,
    Gamepad,
    Dumbbell,
    Utensils,
}

impl CategoryIcon {
    /// Looks up an icon by key. Unrecognized keys resolve to the
    /// briefcase, the default icon.
    pub fn from_key(key: &str) -> CategoryIcon {
        match key {
            "briefcase" => CategoryIcon::Briefcase,
            "home" => CategoryIcon::Home,
            "heart" => CategoryIcon::Heart,
            "book-open" => CategoryIcon::BookOpen,
            "target" => CategoryIcon::Target,
            "shopping-bag" => CategoryIcon::ShoppingBag,
            "plane" => CategoryIcon::Plane,
            "coffee" => CategoryIcon::Coffee,
            "star" => CategoryIcon::Star,
            "zap" => CategoryIcon::Zap,
            "car" => CategoryIcon::Car,
            "music" => CategoryIcon::Music,
            "camera" => CategoryIcon::Camera,
            "gamepad-2" => CategoryIcon::Gamepad,
            "dumbbell" => CategoryIcon::Dumbbell,
            "utensils" => CategoryIcon::Utensils,
            _ => CategoryIcon::Briefcase,
        }
    }

    /// Glyph shown next to the category name in listings.
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Briefcase => "💼",
            CategoryIcon::Home => "🏠",
            CategoryIcon::Heart => "♥",
            CategoryIcon::BookOpen => "📖",
            CategoryIcon::Target => "🎯",
            CategoryIcon::ShoppingBag => "🛍",
            CategoryIcon::Plane => "✈",
            CategoryIcon::Coffee => "☕",
            CategoryIcon::Star => "★",
            CategoryIcon::Zap => "⚡",
            CategoryIcon::Car => "🚗",
            CategoryIcon::Music => "♫",
            CategoryIcon::Camera => "📷",
            CategoryIcon::Gamepad => "🎮",
            CategoryIcon::Dumbbell => "🏋",
            CategoryIcon::Utensils => "🍴",
        }
    }
}

/// User-facing text size preference. The only setting that persists
/// across sessions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// Parses a size key (`small`, `medium`, `large`, `extra-large`).
    pub fn from_key(key: &str) -> Option<FontSize> {
        match key {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            "extra-large" => Some(FontSize::ExtraLarge),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::ExtraLarge => "extra-large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
            FontSize::ExtraLarge => "Extra Large",
        }
    }

    /// Scale factor applied to sized UI elements.
    pub fn multiplier(&self) -> f64 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.125,
            FontSize::ExtraLarge => 1.25,
        }
    }

    /// The next size in the cycle order used by the TUI.
    pub fn next(&self) -> FontSize {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium => FontSize::Large,
            FontSize::Large => FontSize::ExtraLarge,
            FontSize::ExtraLarge => FontSize::Small,
        }
    }
}
