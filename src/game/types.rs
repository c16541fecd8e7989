//! Guessing game data structures.
//!
//! The player hunts a secret integer in a difficulty-dependent range and
//! gets directional (too low / too high) plus proximity (hot / warm / cold)
//! feedback after each valid guess.

use serde::{Deserialize, Serialize};

/// Difficulty tiers. Each tier fixes the guessing range; the attempt budget
/// is derived from the range (see [`super::logic::attempt_budget_for`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase key used in the score file.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Upper bound of the guessing range (inclusive). Lower bound is always 1.
    pub fn range_max(&self) -> u32 {
        match self {
            Self::Easy => 20,
            Self::Medium => 100,
            Self::Hard => 1000,
        }
    }

    /// Maximum guesses before a forced loss.
    pub fn attempt_budget(&self) -> u32 {
        super::logic::attempt_budget_for(self.range_max())
    }
}

/// Lifecycle of one play-through. Transitions are one-directional; a
/// finished session is never restarted, a new one is constructed instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
    Abandoned,
}

impl SessionStatus {
    /// True once the session can no longer accept guesses.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Abandoned)
    }
}

/// Directional classification of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Correct,
    TooLow,
    TooHigh,
    /// Parsed fine but outside [1, range_max]. Does not consume an attempt.
    OutOfRange,
    /// Input did not parse as an integer. Does not consume an attempt.
    NotANumber,
}

/// Categorical closeness signal, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Hot,
    Warm,
    Cold,
    NotApplicable,
}

/// Whether a guess ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    None,
    Won,
    Lost,
}

/// Everything the shell needs to render the result of one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// False for rejected input (not a number, out of range, or session over).
    pub valid: bool,
    pub comparison: Comparison,
    pub proximity: Proximity,
    pub attempts_remaining: u32,
    pub terminal: TerminalState,
}

impl GuessOutcome {
    /// Outcome for input that never entered the game. No attempt consumed.
    pub fn rejected(comparison: Comparison, attempts_remaining: u32) -> Self {
        Self {
            valid: false,
            comparison,
            proximity: Proximity::NotApplicable,
            attempts_remaining,
            terminal: TerminalState::None,
        }
    }
}

/// One play-through: the secret, the range, and the attempt budget.
///
/// Owned by the shell for the duration of a single game; discarded when a
/// new game starts. All rule logic lives in [`super::logic`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pub difficulty: Difficulty,
    pub secret: u32,
    pub range_max: u32,
    pub attempts_used: u32,
    pub attempt_budget: u32,
    pub status: SessionStatus,
}

impl GameSession {
    pub fn attempts_remaining(&self) -> u32 {
        self.attempt_budget.saturating_sub(self.attempts_used)
    }
}
