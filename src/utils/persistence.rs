//! Persistence helpers for ~/.hotcold/ files.
//!
//! Two formats live side by side: JSON for settings (serde) and a flat
//! key=value text file for high scores (format fixed by the score-file
//! contract, see `highscores.rs`).

use std::fs;
use std::io;
use std::path::PathBuf;

/// The ~/.hotcold/ directory, created on first use.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".hotcold");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file inside ~/.hotcold/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file from ~/.hotcold/, falling back to `T::default()` when
/// the file is missing or unreadable or fails to parse.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    fs::read_to_string(&path)
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Save a value as pretty-printed JSON into ~/.hotcold/.
pub fn save_json<T: serde::Serialize>(filename: &str, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(data_path(filename)?, json)
}
