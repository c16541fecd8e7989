//! High-score tracking: fewest attempts to win, per difficulty.
//!
//! Scores persist as a flat text file (`~/.hotcold/scores.txt`): an
//! optional leading `#` comment, then one `key=value` line per difficulty
//! with keys `easy`/`medium`/`hard` and values >= 1. Missing keys mean "no
//! record yet". Loading never fails; a missing or corrupt file is an empty
//! table. Write failures are surfaced as [`PersistenceError`] but leave the
//! in-memory table authoritative for the running session.

use crate::game::Difficulty;
use crate::utils::persistence;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SCORES_FILE: &str = "scores.txt";

const FILE_HEADER: &str = "# hotcold high scores: fewest attempts per difficulty";

/// Non-fatal persistence failure. The game keeps running; the shell shows
/// a soft warning.
#[derive(Debug)]
pub struct PersistenceError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not write {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Best known attempt count per difficulty; `None` means never won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    best: [Option<u32>; Difficulty::ALL.len()],
}

impl HighScoreTable {
    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        self.best[index_of(difficulty)]
    }

    /// Record `attempts` if it beats the stored best (or none is stored).
    /// Returns whether the table changed.
    pub fn record_if_better(&mut self, difficulty: Difficulty, attempts: u32) -> bool {
        let slot = &mut self.best[index_of(difficulty)];
        match *slot {
            Some(best) if best <= attempts => false,
            _ => {
                *slot = Some(attempts);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.best = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.best.iter().all(|b| b.is_none())
    }

    /// Parse the score-file format. Tolerates a present or absent comment
    /// line; skips malformed lines, unknown keys, and zero values.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let Some(difficulty) = Difficulty::from_key(key.trim()) else {
                continue;
            };
            match value.trim().parse::<u32>() {
                Ok(attempts) if attempts >= 1 => {
                    table.best[index_of(difficulty)] = Some(attempts);
                }
                _ => {}
            }
        }
        table
    }

    /// Render the score-file format, comment line included.
    pub fn to_text(&self) -> String {
        let mut out = String::from(FILE_HEADER);
        out.push('\n');
        for difficulty in Difficulty::ALL {
            if let Some(attempts) = self.get(difficulty) {
                out.push_str(difficulty.key());
                out.push('=');
                out.push_str(&attempts.to_string());
                out.push('\n');
            }
        }
        out
    }
}

fn index_of(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

/// Table plus its backing file. All mutation goes through the store so the
/// file tracks every improvement.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    table: HighScoreTable,
}

impl HighScoreStore {
    /// Open a store at an explicit path, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = Self::load(&path);
        Self { path, table }
    }

    /// Open the store at the standard ~/.hotcold/ location.
    pub fn open_default() -> Self {
        let path = persistence::data_path(SCORES_FILE)
            .unwrap_or_else(|_| PathBuf::from(SCORES_FILE));
        Self::open(path)
    }

    /// Read a table from disk. Never fails: missing or corrupt ⇒ empty.
    pub fn load(path: &Path) -> HighScoreTable {
        match fs::read_to_string(path) {
            Ok(text) => HighScoreTable::parse(&text),
            Err(_) => HighScoreTable::default(),
        }
    }

    pub fn table(&self) -> &HighScoreTable {
        &self.table
    }

    /// Update and persist if `attempts` beats the stored best. Returns
    /// whether an update occurred. On a write failure the in-memory update
    /// survives and the error is reported to the caller.
    pub fn record_if_better(
        &mut self,
        difficulty: Difficulty,
        attempts: u32,
    ) -> Result<bool, PersistenceError> {
        if !self.table.record_if_better(difficulty, attempts) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Clear all records and persist the empty table.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.table.clear();
        self.persist()
    }

    /// Write the full table to the backing file.
    pub fn persist(&self) -> Result<(), PersistenceError> {
        fs::write(&self.path, self.table.to_text()).map_err(|source| PersistenceError {
            path: self.path.clone(),
            source,
        })
    }
}
