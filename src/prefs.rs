use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::models::FontSize;

/// Durable user preferences. The font size is the only state that survives
/// across sessions; to-dos and categories are in-memory only.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct Prefs {
    /// Text size preference, written back on every change.
    #[serde(rename = "font-size", default)]
    pub font_size: FontSize,
}

/// Returns the path to the preferences file (`prefs.json`).
///
/// The path is determined in the following order:
/// 1. `LIFETRACK_PREFS` environment variable.
/// 2. `~/.local/share/lifetrack/prefs.json` (on Linux).
/// 3. `./prefs.json` (fallback).
fn prefs_path() -> PathBuf {
    std::env::var("LIFETRACK_PREFS").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("lifetrack");
        if !p.exists() {
            let _ = fs::create_dir_all(&p);
        }
        p.push("prefs.json");
        p
    })
}

/// Loads the preferences from disk.
///
/// Returns the defaults (medium font size) if the file does not exist,
/// cannot be read, or holds an unrecognized value.
pub fn load_prefs() -> Prefs {
    let path = prefs_path();
    if !path.exists() {
        return Prefs::default();
    }
    let mut f = match OpenOptions::new().read(true).open(&path) {
        Ok(f) => f,
        Err(_) => return Prefs::default(),
    };
    let mut s = String::new();
    if f.read_to_string(&mut s).is_err() {
        return Prefs::default();
    }
    serde_json::from_str(&s).unwrap_or_default()
}

/// Saves the preferences to disk, overwriting the existing file.
pub fn save_prefs(prefs: &Prefs) -> std::io::Result<()> {
    let path = prefs_path();
    let s = serde_json::to_string_pretty(prefs).unwrap();
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Deletes the preferences file, restoring the defaults on next load.
pub fn delete_prefs() -> std::io::Result<()> {
    let path = prefs_path();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
