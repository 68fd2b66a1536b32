//! Core library for the `lifetrack` terminal life tracker.
//!
//! The session state ([`store::Tracker`]) owns the category and to-do
//! collections. [`pipeline`] derives the ordered visible list for a date
//! and [`status`] derives per-date completion summaries; both are pure
//! reads over the store. [`prefs`] persists the single durable setting,
//! the font size.

pub mod models;
pub mod store;
pub mod status;
pub mod pipeline;
pub mod prefs;
pub mod commands;
pub mod tui;
