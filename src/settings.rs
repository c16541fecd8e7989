//! UI preferences persisted as JSON (~/.hotcold/settings.json).
//!
//! A color theme (the terminal stand-in for a look-and-feel menu), plus the
//! last difficulty the player picked so the menu cursor starts there.

use crate::game::Difficulty;
use crate::utils::persistence;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::io;

pub const SETTINGS_FILE: &str = "settings.json";

/// Color theme for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Classic,
    Ocean,
    Ember,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Ocean, Theme::Ember];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Ocean => "Ocean",
            Self::Ember => "Ember",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Classic => Self::Ocean,
            Self::Ocean => Self::Ember,
            Self::Ember => Self::Classic,
        }
    }

    /// Accent color for borders and highlights.
    pub fn accent(&self) -> Color {
        match self {
            Self::Classic => Color::Green,
            Self::Ocean => Color::Cyan,
            Self::Ember => Color::Red,
        }
    }

    /// Color for secondary text (hints, footers).
    pub fn dim(&self) -> Color {
        Color::DarkGray
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub last_difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Classic,
            last_difficulty: Difficulty::Easy,
        }
    }
}

impl Settings {
    /// Load from disk; missing or corrupt settings fall back to defaults.
    pub fn load() -> Self {
        persistence::load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(SETTINGS_FILE, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Classic);
        assert_eq!(settings.last_difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_theme_cycle_covers_all() {
        let mut theme = Theme::Classic;
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Classic);
        for t in Theme::ALL {
            assert!(seen.contains(&t));
        }
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::Classic.name(), "Classic");
        assert_eq!(Theme::Ocean.name(), "Ocean");
        assert_eq!(Theme::Ember.name(), "Ember");
    }

    #[test]
    fn test_serde_roundtrip() {
        let settings = Settings {
            theme: Theme::Ember,
            last_difficulty: Difficulty::Hard,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
